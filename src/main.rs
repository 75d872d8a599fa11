//! Radar Defense headless host
//!
//! Loads `settings.txt`-style configuration, runs the simulation at the fixed
//! 33 ms step and reports each run. With `--realtime` ticks are paced against
//! the wall clock through the fixed-step driver.

use std::path::PathBuf;
use std::thread;
use std::time::{Duration, Instant};

use clap::Parser;

use radar_defense::consts::{SIM_DT, TICK_INTERVAL_MS};
use radar_defense::{Config, FixedStepDriver, GameOutcome, SimEvent, Simulation};

#[derive(Parser)]
#[command(name = "radar-defense")]
#[command(about = "Simulate a rotating radar defending its core against rocket salvos")]
struct Args {
    /// Configuration file (`key = value` per line)
    #[arg(short, long, default_value = "settings.txt")]
    config: PathBuf,

    /// Seed for the launch-timing stream (random if omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Number of consecutive runs; the simulation is reset after each game over
    #[arg(long, default_value_t = 1)]
    runs: u32,

    /// Pace ticks against the wall clock instead of running flat out
    #[arg(long)]
    realtime: bool,

    /// Give up on a run after this many ticks
    #[arg(long, default_value_t = 200_000)]
    max_ticks: u64,

    /// Print the final snapshot of each run as JSON
    #[arg(long)]
    json: bool,
}

impl Args {
    /// At least one run, even for `--runs 0`
    fn run_count(&self) -> u32 {
        self.runs.max(1)
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let (config, err) = Config::load_or_default(&args.config);
    if let Some(err) = err {
        log::warn!("{err}; using default configuration");
    }

    let mut sim = match args.seed {
        Some(seed) => {
            log::info!("Seeded launch timings: {seed}");
            Simulation::with_seed(config, seed)
        }
        None => Simulation::new(config),
    };

    let runs = args.run_count();
    let mut driver = FixedStepDriver::default();
    let mut victories = 0;
    for run in 1..=runs {
        if run > 1 {
            sim.reset();
            driver.clear();
        }

        let finished = if args.realtime {
            run_realtime(&mut sim, &mut driver, args.max_ticks)
        } else {
            run_flat_out(&mut sim, args.max_ticks)
        };

        let snapshot = sim.snapshot();
        if !finished {
            log::warn!("Run {run} stopped after {} ticks without a result", snapshot.tick);
        }
        if matches!(snapshot.outcome, Some(GameOutcome::Victory)) {
            victories += 1;
        }

        println!("=== RUN {run} ===");
        println!("{}", snapshot.status_text());
        println!(
            "  Sim time:   {:.1}s ({} ticks)",
            snapshot.tick as f32 * SIM_DT,
            snapshot.tick
        );

        if args.json {
            match serde_json::to_string_pretty(&snapshot) {
                Ok(json) => println!("{json}"),
                Err(e) => log::error!("Failed to serialize snapshot: {e}"),
            }
        }
    }

    if runs > 1 {
        println!();
        println!("Victories: {victories}/{runs}");
    }
}

/// Step until game over or the tick budget runs out. Returns true on game over.
fn run_flat_out(sim: &mut Simulation, max_ticks: u64) -> bool {
    while !sim.is_game_over() && sim.time_ticks < max_ticks {
        sim.advance(SIM_DT);
        log_events(sim);
    }
    sim.is_game_over()
}

fn run_realtime(sim: &mut Simulation, driver: &mut FixedStepDriver, max_ticks: u64) -> bool {
    let interval = Duration::from_millis(TICK_INTERVAL_MS);
    let mut last = Instant::now();

    while !sim.is_game_over() && sim.time_ticks < max_ticks {
        thread::sleep(interval);
        let now = Instant::now();
        driver.update(sim, (now - last).as_secs_f32());
        last = now;
        log_events(sim);
    }
    sim.is_game_over()
}

fn log_events(sim: &mut Simulation) {
    for event in sim.drain_events() {
        match event {
            SimEvent::RocketLaunched { site_id, rocket_id } => {
                log::info!("Rocket {rocket_id} away from site {site_id}");
            }
            SimEvent::RocketIntercepted { rocket_id, pos } => {
                log::info!(
                    "Rocket {rocket_id} intercepted at ({:.1}, {:.1})",
                    pos.x,
                    pos.y
                );
            }
            SimEvent::RadarDestroyed { rocket_id } => {
                log::warn!("Rocket {rocket_id} hit the radar core");
            }
            SimEvent::GameOver(outcome) => {
                log::info!("Game over: {}", outcome.message());
            }
        }
    }
}
