//! `lift-sim` — frame driver for the rust_lift elevator simulator.
//!
//! # One frame
//!
//! ```text
//! Simulation::step(delta):
//!   ① Clock      — SimClock::advance(delta) → elapsed
//!   ② Elevators  — ElevatorSystem::tick(delta, elapsed)
//!                    decide (Dispatcher::tick), then move every car
//!   ③ Passengers — PassengerSystem::tick(elapsed)
//!                    alight/board against ②'s final snapshot, then arrivals
//! ```
//!
//! The order is fixed.  Boarding never sees a car that has not finished
//! moving for the frame, and arrivals placed in ③ are first dispatched in the
//! next frame's ②.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use lift_core::SimConfig;
//! use lift_sim::{SimBuilder, TripStats};
//!
//! let mut sim = SimBuilder::new(SimConfig::default()).build_basic()?;
//! let mut stats = TripStats::default();
//! sim.run_for(600.0, 0.1, &mut stats)?;
//! println!("{stats}");
//! ```

pub mod builder;
pub mod error;
pub mod sim;
pub mod stats;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use sim::Simulation;
pub use stats::TripStats;
