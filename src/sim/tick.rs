//! Fixed timestep simulation tick
//!
//! Order within a tick: radar sweep, site reload timers, launch schedule,
//! rocket motion with core/beam checks, cleanup, end-of-run evaluation.

use super::launcher::draw_interval;
use super::state::{GameOutcome, SimEvent, Simulation};

/// Advance the simulation by one fixed timestep
pub fn tick(sim: &mut Simulation, dt: f32) {
    // Terminal until reset
    if sim.is_game_over() {
        return;
    }

    sim.time_ticks += 1;

    sim.radar.update(dt);

    for site in &mut sim.launch_sites {
        site.update_timer(dt);
    }

    schedule_launch(sim, dt);

    if let Some(outcome) = move_and_engage(sim, dt) {
        sim.finish(outcome);
        return;
    }

    sim.projectiles.retain(|p| p.active);

    if let Some(outcome) = evaluate_end(sim) {
        sim.finish(outcome);
    }
}

/// Two-level gate: the global countdown opens the gate, and the site at the
/// round-robin cursor must also have reloaded. The gate stays open until a
/// launch actually happens.
fn schedule_launch(sim: &mut Simulation, dt: f32) {
    if sim.next_launch_timer > 0.0 {
        sim.next_launch_timer -= dt;
    } else {
        sim.can_launch = true;
    }

    if !sim.can_launch || sim.launched >= sim.config.total_rockets_to_launch {
        return;
    }
    if sim.launch_sites.is_empty() {
        return;
    }

    let cursor = sim.next_site % sim.launch_sites.len();
    if !sim.launch_sites[cursor].is_ready() {
        return;
    }

    let rocket_id = sim.next_entity_id();
    let target = sim.radar.pos;
    let speed = sim.config.rocket_speed;
    let site = &mut sim.launch_sites[cursor];
    let rocket = site.fire(rocket_id, target, speed, &mut sim.rng);
    let site_id = site.id;

    sim.projectiles.push(rocket);
    sim.launched += 1;
    sim.next_launch_timer = draw_interval(
        &mut sim.rng,
        sim.config.launch_interval_min_sec,
        sim.config.launch_interval_max_sec,
    );
    sim.can_launch = false;
    sim.next_site = (cursor + 1) % sim.launch_sites.len();

    sim.events.push(SimEvent::RocketLaunched { site_id, rocket_id });
    log::debug!(
        "Rocket {} launched from site {} ({}/{})",
        rocket_id,
        site_id,
        sim.launched,
        sim.config.total_rockets_to_launch
    );
}

/// Move rockets newest-first. A core breach ends the run immediately and
/// skips the remaining rockets.
fn move_and_engage(sim: &mut Simulation, dt: f32) -> Option<GameOutcome> {
    for i in (0..sim.projectiles.len()).rev() {
        let rocket = &mut sim.projectiles[i];
        if !rocket.active {
            continue;
        }

        rocket.update(dt);

        if sim.radar.core_breached(rocket) {
            sim.radar.destroyed = true;
            sim.events.push(SimEvent::RadarDestroyed {
                rocket_id: rocket.id,
            });
            return Some(GameOutcome::RadarDestroyed);
        }

        if sim.radar.detect_and_intercept(rocket) {
            sim.intercepted += 1;
            sim.events.push(SimEvent::RocketIntercepted {
                rocket_id: rocket.id,
                pos: rocket.pos,
            });
            log::debug!(
                "Rocket {} intercepted at {:.1} from the radar",
                rocket.id,
                rocket.distance_to(sim.radar.pos)
            );
        }
    }
    None
}

/// All rockets spent and none left in flight
fn evaluate_end(sim: &Simulation) -> Option<GameOutcome> {
    let total = sim.config.total_rockets_to_launch;
    if sim.launched < total || !sim.projectiles.is_empty() {
        return None;
    }
    if sim.intercepted == total {
        Some(GameOutcome::Victory)
    } else {
        Some(GameOutcome::DefenseFailed {
            launched: sim.launched,
            intercepted: sim.intercepted,
        })
    }
}
