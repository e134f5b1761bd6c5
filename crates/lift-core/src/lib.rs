//! `lift-core` — foundational types for the `rust_lift` elevator simulator.
//!
//! This crate is a dependency of every other `lift-*` crate.  It has no
//! `lift-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `CarId`, `PassengerId`                                |
//! | [`direction`]   | `Direction` (call direction), `CarState`              |
//! | [`time`]        | `SimClock` — injected simulated clock                 |
//! | [`config`]      | `SimConfig` and its validation                        |
//! | [`rng`]         | `SimRng` (seedable, splittable)                       |
//! | [`error`]       | `LiftError`, `LiftResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod direction;
pub mod error;
pub mod ids;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::SimConfig;
pub use direction::{CarState, Direction};
pub use error::{LiftError, LiftResult};
pub use ids::{CarId, PassengerId};
pub use rng::SimRng;
pub use time::SimClock;
