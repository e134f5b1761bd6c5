//! lobby — headless run of the rust_lift elevator simulator.
//!
//! Simulates a morning in a small office building: a steady trickle of
//! passengers for the first half of the run, then a rush at twice the rate.
//!
//! ```text
//! cargo run -p lobby                      # SimConfig::default()
//! cargo run -p lobby -- building.json     # any subset of SimConfig fields
//! RUST_LOG=debug cargo run -p lobby       # per-door / per-passenger log
//! ```

use std::fs::File;
use std::io::BufReader;
use std::time::Instant;

use anyhow::{Context, Result};
use log::info;

use lift_core::{CarId, SimConfig};
use lift_passenger::{PassengerDetails, PassengerObserver};
use lift_sim::{SimBuilder, TripStats};

// ── Constants ─────────────────────────────────────────────────────────────────

const FRAME_SECS:   f64 = 0.1;
const RUN_MINUTES:  f64 = 30.0;
const RUSH_FACTOR:  f64 = 2.0;

// ── Observer ──────────────────────────────────────────────────────────────────

/// Trip statistics plus a per-floor delivery histogram.
struct LobbyObserver {
    stats:      TripStats,
    deliveries: Vec<u64>,
}

impl LobbyObserver {
    fn new(floors: usize) -> Self {
        Self { stats: TripStats::default(), deliveries: vec![0; floors] }
    }
}

impl PassengerObserver for LobbyObserver {
    fn on_created(&mut self, passenger: &PassengerDetails) {
        self.stats.on_created(passenger);
    }

    fn on_boarded(&mut self, passenger: &PassengerDetails, car: CarId, elapsed_secs: f64) {
        self.stats.on_boarded(passenger, car, elapsed_secs);
    }

    fn on_exited(&mut self, passenger: &PassengerDetails, elapsed_secs: f64) {
        self.stats.on_exited(passenger, elapsed_secs);
        self.deliveries[passenger.destination_floor] += 1;
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn load_config() -> Result<SimConfig> {
    let Some(path) = std::env::args().nth(1) else {
        return Ok(SimConfig::default());
    };
    let file = File::open(&path).with_context(|| format!("opening config {path}"))?;
    let config: SimConfig = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("parsing config {path}"))?;
    info!("loaded config from {path}");
    Ok(config)
}

fn main() -> Result<()> {
    env_logger::init();

    let config = load_config()?;
    println!("=== lobby — rust_lift elevator simulator ===");
    println!(
        "Floors: {}  |  Cars: {} × {} seats  |  Seed: {}",
        config.number_of_floors, config.number_of_cars, config.car_capacity, config.seed
    );
    println!(
        "Speed: {} floors/s  |  Door: {} s  |  Demand: {}/min (×{RUSH_FACTOR} after {} min)",
        config.car_speed,
        config.door_delay_secs,
        config.passengers_per_minute,
        RUN_MINUTES / 2.0
    );
    println!();

    let mut sim = SimBuilder::new(config.clone()).build_basic()?;
    let mut obs = LobbyObserver::new(sim.number_of_floors());

    let half = RUN_MINUTES * 60.0 / 2.0;
    let t0 = Instant::now();
    let mut frames = sim.run_for(half, FRAME_SECS, &mut obs)?;
    sim.update_passengers_per_minute(config.passengers_per_minute * RUSH_FACTOR)?;
    frames += sim.run_for(half, FRAME_SECS, &mut obs)?;
    let wall = t0.elapsed();

    // ── Summary ───────────────────────────────────────────────────────────
    println!("Simulated {} in {frames} frames ({:.3} s wall)", sim.clock(), wall.as_secs_f64());
    println!("  {}", obs.stats);
    println!(
        "  still waiting: {}  |  dropped at cap: {}",
        sim.passengers().waiting_count(),
        sim.passengers().dropped_count()
    );
    println!();

    println!("{:<8} {:<10} {:<8} {:<6} {:<8}", "Car", "Position", "State", "Door", "Aboard");
    println!("{}", "-".repeat(44));
    for (i, car) in sim.car_details().iter().enumerate() {
        let id = CarId(i as u32);
        println!(
            "{:<8} {:<10.2} {:<8} {:<6} {:<8}",
            i,
            car.position,
            car.state.to_string(),
            if car.door_open { "open" } else { "shut" },
            sim.passengers().onboard_count(id),
        );
    }
    println!();

    println!("{:<8} {:<10}", "Floor", "Delivered");
    println!("{}", "-".repeat(20));
    for (floor, n) in obs.deliveries.iter().enumerate().rev() {
        println!("{floor:<8} {n:<10}");
    }

    Ok(())
}
