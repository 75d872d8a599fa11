//! Rotating radar at the origin
//!
//! Zones, from the center out:
//! - core vulnerability radius: a rocket here destroys the radar (checked by the controller)
//! - dead zone: rockets here are invisible to the beam
//! - beam-effective radius: outer edge of the interception sector
//! - circular attack range, max detection range: reported only, they do not
//!   take part in interception

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::projectile::Projectile;
use super::sector::BeamSector;
use crate::config::Config;
use crate::normalize_angle;

/// The defended radar
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Radar {
    pub pos: Vec2,
    /// Current sweep heading, degrees in [0, 360)
    pub angle_deg: f32,
    pub rotation_speed_dps: f32,
    pub beam_width_deg: f32,
    pub max_detection_range: f32,
    pub beam_effective_radius: f32,
    pub circular_attack_range: f32,
    pub core_vulnerability_radius: f32,
    pub dead_zone_radius: f32,
    pub destroyed: bool,
}

impl Radar {
    /// Build a radar at `pos` from configuration, sweep starting at 0°
    pub fn from_config(pos: Vec2, config: &Config) -> Self {
        Self {
            pos,
            angle_deg: 0.0,
            rotation_speed_dps: config.radar_rotation_speed_dps,
            beam_width_deg: config.radar_beam_width_degrees,
            max_detection_range: config.radar_max_detection_range,
            beam_effective_radius: config.radar_beam_effective_radius,
            circular_attack_range: config.radar_circular_attack_range,
            core_vulnerability_radius: config.radar_core_vulnerability_radius,
            dead_zone_radius: config.radar_dead_zone_radius,
            destroyed: false,
        }
    }

    /// Advance the sweep
    pub fn update(&mut self, dt: f32) {
        if self.destroyed {
            return;
        }
        self.angle_deg = normalize_angle(self.angle_deg + self.rotation_speed_dps * dt);
    }

    /// The interception sector at the current sweep heading
    pub fn beam(&self) -> BeamSector {
        BeamSector::new(
            self.dead_zone_radius,
            self.beam_effective_radius,
            self.angle_deg,
            self.beam_width_deg,
        )
    }

    /// Whether a rocket has reached the core
    pub fn core_breached(&self, projectile: &Projectile) -> bool {
        projectile.distance_to(self.pos) <= self.core_vulnerability_radius
    }

    /// Shoot down `projectile` if it is inside the beam right now.
    ///
    /// Returns true on interception. Dead-zone rockets are never hit, whatever
    /// their bearing.
    pub fn detect_and_intercept(&self, projectile: &mut Projectile) -> bool {
        if self.destroyed || !projectile.active {
            return false;
        }

        if self.beam().contains_point(projectile.pos - self.pos) {
            projectile.intercept();
            return true;
        }
        false
    }
}
