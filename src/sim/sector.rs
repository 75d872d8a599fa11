//! Beam sector geometry
//!
//! In polar coordinates around the radar, the interception beam is an annular
//! sector:
//! - inner_radius: exclusive lower bound (the dead zone is never covered)
//! - outer_radius: inclusive upper bound (beam-effective radius)
//! - center_deg, half_width_deg: angular extent, inclusive at both edges

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::{angle_difference, bearing_deg, normalize_angle, polar_to_cartesian};

/// An annular sector in polar space, angles in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BeamSector {
    pub inner_radius: f32,
    pub outer_radius: f32,
    /// Beam heading, normalized to [0, 360)
    pub center_deg: f32,
    pub half_width_deg: f32,
}

impl BeamSector {
    pub fn new(inner_radius: f32, outer_radius: f32, center_deg: f32, width_deg: f32) -> Self {
        Self {
            inner_radius,
            outer_radius,
            center_deg: normalize_angle(center_deg),
            half_width_deg: width_deg / 2.0,
        }
    }

    /// Check if a radius falls in the (inner, outer] band
    #[inline]
    pub fn contains_radius(&self, r: f32) -> bool {
        r > self.inner_radius && r <= self.outer_radius
    }

    /// Check if a bearing is within the angular extent (handles wraparound)
    #[inline]
    pub fn contains_angle(&self, theta_deg: f32) -> bool {
        angle_difference(theta_deg, self.center_deg).abs() <= self.half_width_deg
    }

    /// Check if a point relative to the sector apex is inside
    pub fn contains_point(&self, rel: Vec2) -> bool {
        let r = rel.length();
        if !self.contains_radius(r) {
            return false;
        }
        self.contains_angle(bearing_deg(Vec2::ZERO, rel))
    }

    /// Outer corners of the beam (start edge, end edge), relative to the apex
    pub fn edge_points(&self) -> [Vec2; 2] {
        [
            polar_to_cartesian(self.outer_radius, self.center_deg - self.half_width_deg),
            polar_to_cartesian(self.outer_radius, self.center_deg + self.half_width_deg),
        ]
    }
}
