//! Tick-driven defense simulation
//!
//! All gameplay logic lives here:
//! - Fixed timestep only
//! - One injected random stream for launch timings
//! - Stable iteration order (rockets newest first, sites by index)
//! - No rendering or platform dependencies

pub mod launcher;
pub mod projectile;
pub mod radar;
pub mod sector;
pub mod snapshot;
pub mod state;
pub mod tick;

pub use launcher::{LaunchSite, draw_interval};
pub use projectile::Projectile;
pub use radar::Radar;
pub use sector::BeamSector;
pub use snapshot::{LaunchSiteView, ProjectileView, RadarView, Snapshot, build_snapshot};
pub use state::{GameOutcome, GamePhase, SimEvent, Simulation, START_MESSAGE, corner_sites};
pub use tick::tick;
