//! Radar Defense - a rotating radar protecting its core from inbound rockets
//!
//! Core modules:
//! - `sim`: Tick-driven simulation (radar sweep, rockets, launch scheduling)
//! - `config`: Key-value configuration with documented defaults
//! - `driver`: Fixed-step tick driver and viewport mapping for hosts

pub mod config;
pub mod driver;
pub mod sim;

pub use config::{Config, ConfigError, ConfigKey};
pub use driver::{FixedStepDriver, Viewport};
pub use sim::{GameOutcome, GamePhase, SimEvent, Simulation, Snapshot};

use glam::Vec2;

/// Simulation configuration constants
pub mod consts {
    /// Reference tick interval in milliseconds (~30 Hz)
    pub const TICK_INTERVAL_MS: u64 = 33;
    /// Fixed simulation timestep in seconds
    pub const SIM_DT: f32 = TICK_INTERVAL_MS as f32 / 1000.0;
    /// Maximum substeps per driver update to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// One launch site per quadrant corner
    pub const LAUNCH_SITE_COUNT: usize = 4;
    /// Beam-effective radius = max detection range / this
    pub const BEAM_EFFECTIVE_DIVISOR: f32 = 1.5;
}

/// Normalize an angle in degrees to [0, 360)
#[inline]
pub fn normalize_angle(angle: f32) -> f32 {
    let mut angle = angle % 360.0;
    if angle < 0.0 {
        angle += 360.0;
    }
    // -1e-8 % 360 + 360 rounds to exactly 360.0 in f32
    if angle >= 360.0 { 0.0 } else { angle }
}

/// Shortest signed difference `a - b` in degrees, folded into [-180, 180]
#[inline]
pub fn angle_difference(a: f32, b: f32) -> f32 {
    let mut diff = normalize_angle(a) - normalize_angle(b);
    if diff > 180.0 {
        diff -= 360.0;
    }
    if diff < -180.0 {
        diff += 360.0;
    }
    diff
}

/// Bearing from `from` to `to` in degrees, normalized to [0, 360)
#[inline]
pub fn bearing_deg(from: Vec2, to: Vec2) -> f32 {
    let d = to - from;
    normalize_angle(d.y.atan2(d.x).to_degrees())
}

/// Convert polar (r, degrees) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, theta_deg: f32) -> Vec2 {
    let theta = theta_deg.to_radians();
    Vec2::new(r * theta.cos(), r * theta.sin())
}
