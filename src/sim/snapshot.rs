//! Read-only view of the simulation for presentation layers.
//!
//! Building a snapshot never modifies the simulation.

use glam::Vec2;
use serde::Serialize;

use super::state::{GameOutcome, Simulation};

#[derive(Debug, Clone, Serialize)]
pub struct RadarView {
    pub pos: Vec2,
    pub angle_deg: f32,
    pub beam_width_deg: f32,
    pub dead_zone_radius: f32,
    pub beam_effective_radius: f32,
    pub circular_attack_range: f32,
    pub max_detection_range: f32,
    pub core_vulnerability_radius: f32,
    pub destroyed: bool,
    /// Outer corners of the beam triangle, world coordinates
    pub beam_edges: [Vec2; 2],
}

#[derive(Debug, Clone, Serialize)]
pub struct LaunchSiteView {
    pub id: u32,
    pub pos: Vec2,
    pub reload_timer: f32,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProjectileView {
    pub id: u32,
    pub pos: Vec2,
    pub vel: Vec2,
    pub active: bool,
    pub intercepted: bool,
}

/// Everything a renderer or HUD needs for one frame
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub tick: u64,
    pub radar: RadarView,
    pub launch_sites: Vec<LaunchSiteView>,
    pub projectiles: Vec<ProjectileView>,
    pub launched: u32,
    pub intercepted: u32,
    pub total_to_launch: u32,
    pub status: String,
    pub game_over: bool,
    pub outcome: Option<GameOutcome>,
}

impl Snapshot {
    /// HUD text block
    pub fn status_text(&self) -> String {
        format!(
            "Rockets launched: {}/{}\nIntercepted: {}\nRadar status: {}\n{}",
            self.launched,
            self.total_to_launch,
            self.intercepted,
            if self.radar.destroyed {
                "DESTROYED"
            } else {
                "OPERATIONAL"
            },
            self.status
        )
    }
}

/// Build a snapshot from the current state
pub fn build_snapshot(sim: &Simulation) -> Snapshot {
    Snapshot {
        tick: sim.time_ticks,
        radar: build_radar(sim),
        launch_sites: sim
            .launch_sites
            .iter()
            .map(|s| LaunchSiteView {
                id: s.id,
                pos: s.pos,
                reload_timer: s.reload_timer,
            })
            .collect(),
        projectiles: sim
            .projectiles
            .iter()
            .map(|p| ProjectileView {
                id: p.id,
                pos: p.pos,
                vel: p.vel,
                active: p.active,
                intercepted: p.intercepted,
            })
            .collect(),
        launched: sim.launched,
        intercepted: sim.intercepted,
        total_to_launch: sim.config.total_rockets_to_launch,
        status: sim.status.clone(),
        game_over: sim.is_game_over(),
        outcome: sim.outcome(),
    }
}

fn build_radar(sim: &Simulation) -> RadarView {
    let radar = &sim.radar;
    let [a, b] = radar.beam().edge_points();
    RadarView {
        pos: radar.pos,
        angle_deg: radar.angle_deg,
        beam_width_deg: radar.beam_width_deg,
        dead_zone_radius: radar.dead_zone_radius,
        beam_effective_radius: radar.beam_effective_radius,
        circular_attack_range: radar.circular_attack_range,
        max_detection_range: radar.max_detection_range,
        core_vulnerability_radius: radar.core_vulnerability_radius,
        destroyed: radar.destroyed,
        beam_edges: [radar.pos + a, radar.pos + b],
    }
}

impl Simulation {
    pub fn snapshot(&self) -> Snapshot {
        build_snapshot(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::consts::SIM_DT;

    #[test]
    fn test_snapshot_mirrors_state() {
        let config = Config {
            launch_interval_min_sec: 0.0,
            launch_interval_max_sec: 0.0,
            ..Config::default()
        };
        let mut sim = Simulation::with_seed(config, 8);
        sim.advance(SIM_DT);

        let snap = sim.snapshot();
        assert_eq!(snap.tick, 1);
        assert_eq!(snap.launch_sites.len(), 4);
        assert_eq!(snap.projectiles.len(), 1);
        assert_eq!(snap.launched, 1);
        assert_eq!(snap.total_to_launch, 10);
        assert!(!snap.game_over);
        assert!(snap.outcome.is_none());
        assert_eq!(snap.radar.angle_deg, sim.radar.angle_deg);
        assert!((snap.radar.beam_effective_radius - 100.0).abs() < 1e-4);
        assert_eq!(snap.projectiles[0].pos, sim.projectiles[0].pos);
    }

    #[test]
    fn test_status_text() {
        let sim = Simulation::with_seed(Config::default(), 8);
        let text = sim.snapshot().status_text();
        assert!(text.contains("Rockets launched: 0/10"));
        assert!(text.contains("Intercepted: 0"));
        assert!(text.contains("Radar status: OPERATIONAL"));
        assert!(text.ends_with("Game started, defend the radar"));
    }

    #[test]
    fn test_snapshot_serializes() {
        let sim = Simulation::with_seed(Config::default(), 8);
        let json = serde_json::to_string(&sim.snapshot()).unwrap();
        assert!(json.contains("\"beam_effective_radius\""));
        assert!(json.contains("\"game_over\":false"));
    }
}
