//! `lift-passenger` — the riders: who arrives, who boards, who gets off.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                      |
//! |---------------|---------------------------------------------------------------|
//! | [`passenger`] | `Passenger` entity, `PassengerDetails` snapshot               |
//! | [`system`]    | `PassengerSystem` — population, demand, boarding/alighting    |
//! | [`observer`]  | `PassengerObserver` hooks, `NoopObserver`, `OnExit` adapter   |
//!
//! # Passenger lifecycle
//!
//! ```text
//! created (waiting at starting floor, hall call placed)
//!    │  door open, car heading the passenger's way, room aboard
//!    ▼
//! boarded (elevator_index set, stop committed for destination)
//!    │  door open at destination floor
//!    ▼
//! delivered (on_exited fired once, removed from the population)
//! ```
//!
//! `PassengerSystem::tick` must run after `ElevatorSystem::tick` in the same
//! frame so boarding sees the cars' final positions and doors for the frame.

pub mod observer;
pub mod passenger;
pub mod system;

#[cfg(test)]
mod tests;

pub use observer::{NoopObserver, OnExit, PassengerObserver};
pub use passenger::{Passenger, PassengerDetails};
pub use system::PassengerSystem;
