//! `lift-system` — the fleet, its dispatcher, and the command surface.
//!
//! # Two-phase tick
//!
//! ```text
//! ElevatorSystem::tick(delta, elapsed):
//!   ① Decide — Dispatcher::tick over every car (no car has moved yet)
//!   ② Move   — ElevatorCar::tick(delta) for every car, in index order
//! ```
//!
//! Decisions never observe a partially moved fleet, and by the time `tick`
//! returns every car holds its final position for the frame.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use lift_core::{SimConfig, SimRng};
//! use lift_system::ElevatorSystemBuilder;
//!
//! let config = SimConfig::default();
//! let mut rng = SimRng::new(config.seed);
//! let mut elevators = ElevatorSystemBuilder::new(config, &mut rng).build_basic()?;
//! elevators.call_for_car(0, Direction::Up)?;
//! elevators.tick(0.1, 0.1)?;
//! ```

pub mod builder;
pub mod system;


pub use builder::ElevatorSystemBuilder;
pub use system::ElevatorSystem;
