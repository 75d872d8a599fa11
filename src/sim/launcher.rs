//! Launch sites on the perimeter
//!
//! Each site keeps its own reload countdown. A ready site does not fire by
//! itself; the controller's schedule decides when it is its turn.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::projectile::Projectile;

/// Uniform draw in [min, max) from the shared stream.
///
/// `min >= max` yields exactly `min`; never panics on an empty range.
pub fn draw_interval<R: Rng + ?Sized>(rng: &mut R, min: f32, max: f32) -> f32 {
    if !(max > min) {
        return min;
    }
    let v = min + rng.random::<f32>() * (max - min);
    // The sum can round up onto `max`
    if v < max { v } else { max.next_down().max(min) }
}

/// A fixed launch site
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LaunchSite {
    pub id: u32,
    pub pos: Vec2,
    pub min_interval: f32,
    pub max_interval: f32,
    /// Seconds until this site has reloaded (ready at <= 0)
    pub reload_timer: f32,
}

impl LaunchSite {
    pub fn new<R: Rng + ?Sized>(
        id: u32,
        pos: Vec2,
        min_interval: f32,
        max_interval: f32,
        rng: &mut R,
    ) -> Self {
        let mut site = Self {
            id,
            pos,
            min_interval,
            max_interval,
            reload_timer: 0.0,
        };
        site.reset_timer(rng);
        site
    }

    /// Start a fresh reload countdown
    pub fn reset_timer<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.reload_timer = draw_interval(rng, self.min_interval, self.max_interval);
    }

    /// Count the reload timer down
    pub fn update_timer(&mut self, dt: f32) {
        if self.reload_timer > 0.0 {
            self.reload_timer -= dt;
        }
    }

    #[inline]
    pub fn is_ready(&self) -> bool {
        self.reload_timer <= 0.0
    }

    /// Launch a rocket toward `target` and start reloading
    pub fn fire<R: Rng + ?Sized>(
        &mut self,
        projectile_id: u32,
        target: Vec2,
        speed: f32,
        rng: &mut R,
    ) -> Projectile {
        self.reset_timer(rng);
        Projectile::new(projectile_id, self.pos, target, speed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_timer_drawn_within_bounds() {
        let mut rng = Pcg32::seed_from_u64(7);
        for i in 0..200 {
            let site = LaunchSite::new(i, Vec2::ZERO, 5.0, 8.0, &mut rng);
            assert!(site.reload_timer >= 5.0 && site.reload_timer < 8.0);
        }
    }

    /// Generator pinned at the top of its output range
    struct MaxRng;

    impl rand::RngCore for MaxRng {
        fn next_u32(&mut self) -> u32 {
            u32::MAX
        }

        fn next_u64(&mut self) -> u64 {
            u64::MAX
        }

        fn fill_bytes(&mut self, dst: &mut [u8]) {
            dst.fill(0xff);
        }
    }

    #[test]
    fn test_draw_never_reaches_upper_bound() {
        let v = draw_interval(&mut MaxRng, 5.0, 8.0);
        assert!(v >= 5.0 && v < 8.0, "upper bound reached: {v}");

        let v = draw_interval(&mut MaxRng, 0.0, 1.0);
        assert!(v < 1.0);

        // Reload timers go through the same draw
        let site = LaunchSite::new(0, Vec2::ZERO, 5.0, 8.0, &mut MaxRng);
        assert!(site.reload_timer < 8.0);
    }

    #[test]
    fn test_inverted_bounds_draw_min() {
        let mut rng = Pcg32::seed_from_u64(7);
        assert_eq!(draw_interval(&mut rng, 3.0, 1.0), 3.0);
    }

    #[test]
    fn test_equal_bounds_draw_exactly() {
        let mut rng = Pcg32::seed_from_u64(7);
        assert_eq!(draw_interval(&mut rng, 2.0, 2.0), 2.0);
        let site = LaunchSite::new(0, Vec2::ZERO, 0.0, 0.0, &mut rng);
        assert!(site.is_ready());
    }

    #[test]
    fn test_countdown_reaches_ready_and_stops() {
        let mut rng = Pcg32::seed_from_u64(1);
        let mut site = LaunchSite::new(0, Vec2::ZERO, 1.0, 1.0, &mut rng);
        assert!(!site.is_ready());
        for _ in 0..10 {
            site.update_timer(0.25);
        }
        assert!(site.is_ready());
        // Stops counting once elapsed
        assert!(site.reload_timer > -0.25);
    }

    #[test]
    fn test_fire_resets_timer_and_aims_at_target() {
        let mut rng = Pcg32::seed_from_u64(3);
        let mut site = LaunchSite::new(2, Vec2::new(100.0, 0.0), 5.0, 8.0, &mut rng);
        site.reload_timer = 0.0;

        let rocket = site.fire(9, Vec2::ZERO, 50.0, &mut rng);
        assert_eq!(rocket.id, 9);
        assert_eq!(rocket.pos, Vec2::new(100.0, 0.0));
        assert!((rocket.vel - Vec2::new(-50.0, 0.0)).length() < 1e-4);
        assert!(site.reload_timer >= 5.0 && site.reload_timer < 8.0);
    }

    #[test]
    fn test_sites_share_one_stream() {
        // Two sites built back to back from the same stream get different timers
        let mut rng = Pcg32::seed_from_u64(42);
        let a = LaunchSite::new(0, Vec2::ZERO, 0.0, 100.0, &mut rng);
        let b = LaunchSite::new(1, Vec2::ZERO, 0.0, 100.0, &mut rng);
        assert_ne!(a.reload_timer, b.reload_timer);
    }
}
