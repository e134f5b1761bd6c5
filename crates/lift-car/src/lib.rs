//! `lift-car` — one elevator car's physical state and its commands.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                   |
//! |---------------|------------------------------------------------------------|
//! | [`car`]       | `ElevatorCar` — position, motion state, destination, door  |
//! | [`snapshot`]  | `CarDetails` — immutable per-frame copy for collaborators  |
//!
//! # Motion model
//!
//! A car holds a continuous floor coordinate.  Each frame, a moving car with
//! a closed door and a destination advances `speed * delta_secs` floors toward
//! that destination and is clamped onto it, so arrival is detected by exact
//! equality `position == destination`.
//!
//! The car performs no bounds checks on destinations; the dispatcher only
//! ever commands floors inside the building.

pub mod car;
pub mod snapshot;


pub use car::ElevatorCar;
pub use snapshot::CarDetails;
