//! Host-side plumbing: fixed-step tick driver and viewport mapping
//!
//! The simulation only understands whole `SIM_DT` steps. Hosts feed real
//! elapsed time here and the driver turns it into ticks.

use glam::Vec2;

use crate::consts::{MAX_SUBSTEPS, SIM_DT};
use crate::sim::Simulation;

/// Longest wall-time slice accepted per update
pub const MAX_FRAME_SECS: f32 = 0.25;

/// Accumulates wall time and runs fixed simulation steps
#[derive(Debug, Clone)]
pub struct FixedStepDriver {
    pub dt: f32,
    pub max_substeps: u32,
    accumulator: f32,
}

impl Default for FixedStepDriver {
    fn default() -> Self {
        Self::new(SIM_DT)
    }
}

impl FixedStepDriver {
    pub fn new(dt: f32) -> Self {
        Self {
            dt,
            max_substeps: MAX_SUBSTEPS,
            accumulator: 0.0,
        }
    }

    /// Feed `elapsed` seconds of wall time. Returns the number of ticks run.
    ///
    /// Long stalls are clamped so a slow frame cannot trigger a burst of
    /// catch-up ticks.
    pub fn update(&mut self, sim: &mut Simulation, elapsed: f32) -> u32 {
        let elapsed = elapsed.min(MAX_FRAME_SECS);
        self.accumulator += elapsed;

        let mut substeps = 0;
        while self.accumulator >= self.dt && substeps < self.max_substeps {
            sim.advance(self.dt);
            self.accumulator -= self.dt;
            substeps += 1;
        }
        substeps
    }

    /// Drop any partial step (after a reset or pause)
    pub fn clear(&mut self) {
        self.accumulator = 0.0;
    }
}

/// Host window size; the world origin sits at its center
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
    origin: Vec2,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        let mut viewport = Self {
            width,
            height,
            origin: Vec2::ZERO,
        };
        viewport.resize(width, height);
        viewport
    }

    /// Recompute the world origin after a window resize
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
        self.origin = Vec2::new(width / 2.0, height / 2.0);
    }

    /// Screen position of the world origin
    pub fn origin(&self) -> Vec2 {
        self.origin
    }

    /// World to screen (screen y grows downward, like the world)
    #[inline]
    pub fn world_to_screen(&self, world: Vec2) -> Vec2 {
        world + self.origin
    }

    #[inline]
    pub fn screen_to_world(&self, screen: Vec2) -> Vec2 {
        screen - self.origin
    }
}
