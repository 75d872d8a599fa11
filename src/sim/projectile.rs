//! Inbound rocket with straight-line motion

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// A rocket in flight
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Projectile {
    pub id: u32,
    pub pos: Vec2,
    /// Units/sec; magnitude equals the launch speed (or zero)
    pub vel: Vec2,
    pub active: bool,
    /// Set by the radar when it shoots this rocket down
    pub intercepted: bool,
}

impl Projectile {
    /// Create a rocket at `start` heading for `target` at `speed`.
    ///
    /// A zero-length heading gives a stationary rocket.
    pub fn new(id: u32, start: Vec2, target: Vec2, speed: f32) -> Self {
        let vel = (target - start).normalize_or_zero() * speed;
        Self {
            id,
            pos: start,
            vel,
            active: true,
            intercepted: false,
        }
    }

    /// Integrate position over `dt` seconds
    pub fn update(&mut self, dt: f32) {
        if !self.active {
            return;
        }
        self.pos += self.vel * dt;
    }

    pub fn distance_to(&self, point: Vec2) -> f32 {
        self.pos.distance(point)
    }

    /// Mark as shot down by the radar
    pub fn intercept(&mut self) {
        self.active = false;
        self.intercepted = true;
    }
}
