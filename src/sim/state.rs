//! Simulation state and the run lifecycle
//!
//! Everything that changes during a run is owned here, including the single
//! random stream shared by all launch sites.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::launcher::LaunchSite;
use super::projectile::Projectile;
use super::radar::Radar;
use crate::config::Config;

/// Status message shown at the start of every run
pub const START_MESSAGE: &str = "Game started, defend the radar";

/// How a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOutcome {
    /// A rocket reached the core
    RadarDestroyed,
    /// Every rocket was intercepted
    Victory,
    /// All rockets spent, some got through to the ground
    DefenseFailed { launched: u32, intercepted: u32 },
}

impl GameOutcome {
    pub fn message(&self) -> String {
        match self {
            GameOutcome::RadarDestroyed => "Radar destroyed".to_string(),
            GameOutcome::Victory => "VICTORY: all rockets intercepted".to_string(),
            GameOutcome::DefenseFailed {
                launched,
                intercepted,
            } => format!("DEFENSE FAILED: launched {launched}, intercepted {intercepted}"),
        }
    }
}

/// Current phase of the run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    Running,
    /// Terminal until `reset`
    GameOver(GameOutcome),
}

/// Notable things that happened during a tick, drained by the host
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SimEvent {
    RocketLaunched { site_id: u32, rocket_id: u32 },
    RocketIntercepted { rocket_id: u32, pos: Vec2 },
    RadarDestroyed { rocket_id: u32 },
    GameOver(GameOutcome),
}

/// Complete simulation state (the controller)
#[derive(Debug, Clone)]
pub struct Simulation {
    pub config: Config,
    pub radar: Radar,
    /// Fixed order = firing order
    pub launch_sites: Vec<LaunchSite>,
    /// Rockets in flight, insertion order
    pub projectiles: Vec<Projectile>,
    pub launched: u32,
    pub intercepted: u32,
    /// Global countdown until the next launch may happen
    pub next_launch_timer: f32,
    /// Opens when the global countdown elapses, closes on an actual launch
    pub can_launch: bool,
    /// Round-robin cursor into `launch_sites`
    pub next_site: usize,
    pub phase: GamePhase,
    pub status: String,
    /// Simulation tick counter for the current run
    pub time_ticks: u64,
    pub events: Vec<SimEvent>,
    pub(crate) rng: Pcg32,
    next_id: u32,
}

impl Simulation {
    /// Create a simulation with an entropy-seeded random stream
    pub fn new(config: Config) -> Self {
        Self::with_rng(config, Pcg32::from_rng(&mut rand::rng()))
    }

    /// Create a simulation with a fixed seed (reproducible launch timings)
    pub fn with_seed(config: Config, seed: u64) -> Self {
        Self::with_rng(config, Pcg32::seed_from_u64(seed))
    }

    fn with_rng(mut config: Config, rng: Pcg32) -> Self {
        config.recompute_derived();
        let mut sim = Self {
            radar: Radar::from_config(Vec2::ZERO, &config),
            config,
            launch_sites: Vec::new(),
            projectiles: Vec::new(),
            launched: 0,
            intercepted: 0,
            next_launch_timer: 0.0,
            can_launch: true,
            next_site: 0,
            phase: GamePhase::Running,
            status: START_MESSAGE.to_string(),
            time_ticks: 0,
            events: Vec::new(),
            rng,
            next_id: 1,
        };
        sim.reset();
        sim
    }

    /// Start a new run from configuration.
    ///
    /// The random stream carries on; everything else is rebuilt.
    pub fn reset(&mut self) {
        self.config.recompute_derived();
        self.radar = Radar::from_config(Vec2::ZERO, &self.config);
        self.launch_sites = corner_sites(&self.config, &mut self.rng);
        self.projectiles.clear();
        self.launched = 0;
        self.intercepted = 0;
        // First rocket may go as soon as its site has reloaded
        self.next_launch_timer = 0.0;
        self.can_launch = true;
        self.next_site = 0;
        self.phase = GamePhase::Running;
        self.status = START_MESSAGE.to_string();
        self.time_ticks = 0;
        self.events.clear();
        self.next_id = 1;
        log::info!(
            "Run started: {} rockets, beam {:.0}° out to {:.1}",
            self.config.total_rockets_to_launch,
            self.radar.beam_width_deg,
            self.radar.beam_effective_radius
        );
    }

    /// Advance one fixed step
    pub fn advance(&mut self, dt: f32) {
        super::tick::tick(self, dt);
    }

    /// Allocate a new rocket ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn is_game_over(&self) -> bool {
        matches!(self.phase, GamePhase::GameOver(_))
    }

    pub fn outcome(&self) -> Option<GameOutcome> {
        match self.phase {
            GamePhase::GameOver(outcome) => Some(outcome),
            GamePhase::Running => None,
        }
    }

    /// Take all events queued since the last drain
    pub fn drain_events(&mut self) -> Vec<SimEvent> {
        std::mem::take(&mut self.events)
    }

    /// Enter the terminal phase
    pub(crate) fn finish(&mut self, outcome: GameOutcome) {
        self.phase = GamePhase::GameOver(outcome);
        self.status = outcome.message();
        self.events.push(SimEvent::GameOver(outcome));
        log::info!("Game over after {} ticks: {}", self.time_ticks, self.status);
    }
}

/// Four sites on the diagonals, `distance_corner_to_center` from the radar.
///
/// Order: top-left, top-right, bottom-right, bottom-left (screen y down).
pub fn corner_sites<R: Rng + ?Sized>(config: &Config, rng: &mut R) -> Vec<LaunchSite> {
    let d = config.distance_corner_to_center / std::f32::consts::SQRT_2;
    [
        Vec2::new(-d, -d),
        Vec2::new(d, -d),
        Vec2::new(d, d),
        Vec2::new(-d, d),
    ]
    .into_iter()
    .enumerate()
    .map(|(id, pos)| {
        LaunchSite::new(
            id as u32,
            pos,
            config.launch_interval_min_sec,
            config.launch_interval_max_sec,
            rng,
        )
    })
    .collect()
}
