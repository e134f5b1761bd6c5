//! Simulator error type.
//!
//! Every fallible entry point of the `lift-*` crates returns `LiftResult`.
//! Per-tick logic is total given valid inputs, so these variants describe
//! bad inputs at the command surface or at construction time.

use thiserror::Error;

use crate::{CarId, PassengerId};

/// The top-level error type shared by all `lift-*` crates.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum LiftError {
    #[error("floor {floor} is outside the building (floors 0..{floors})")]
    InvalidFloor { floor: usize, floors: usize },

    #[error("{car} does not exist (fleet has {cars} cars)")]
    InvalidCar { car: CarId, cars: usize },

    #[error("a trip from floor {start} to floor {destination} goes nowhere")]
    InvalidTrip { start: usize, destination: usize },

    #[error("{0} is already aboard a car")]
    AlreadyBoarded(PassengerId),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("invalid simulated time: {0}")]
    InvalidTime(String),

    #[error("invalid tuning value: {0}")]
    InvalidRate(f64),
}

/// Shorthand result type for all `lift-*` crates.
pub type LiftResult<T> = Result<T, LiftError>;
