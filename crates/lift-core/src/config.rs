//! Top-level simulation configuration.

use crate::{LiftError, LiftResult};

/// Shape of the building and tuning of the fleet and the passenger demand.
///
/// Typically built from `SimConfig::default()` with a few fields overridden,
/// or loaded from a JSON file by the application crate (with the `serde`
/// feature).  Call [`validate`](Self::validate) before building anything from
/// it; the builders in `lift-system` and `lift-sim` do so themselves.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    /// Floors in the building, numbered `0..number_of_floors`.
    pub number_of_floors: usize,

    /// Cars in the fleet.  Fixed for the run.
    pub number_of_cars: usize,

    /// Passengers one car can hold.
    pub car_capacity: usize,

    /// Car speed in floors per simulated second.  Tunable mid-run.
    pub car_speed: f64,

    /// How long a door stays open once opened, in simulated seconds.
    pub door_delay_secs: f64,

    /// Mean passenger arrival rate.  Tunable mid-run; 0 stops arrivals.
    pub passengers_per_minute: f64,

    /// Upper bound on the live passenger population.  Arrivals beyond it are
    /// dropped, not deferred.
    pub max_passengers: usize,

    /// Master RNG seed.  The same seed always produces identical runs.
    pub seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            number_of_floors:      8,
            number_of_cars:        4,
            car_capacity:          9,
            car_speed:             0.2,
            door_delay_secs:       3.0,
            passengers_per_minute: 60.0,
            max_passengers:        200,
            seed:                  42,
        }
    }
}

impl SimConfig {
    /// Fail fast on a configuration that cannot produce a usable simulation.
    pub fn validate(&self) -> LiftResult<()> {
        if self.number_of_cars == 0 {
            return Err(LiftError::Config("number_of_cars must be at least 1".into()));
        }
        if self.number_of_floors < 2 {
            return Err(LiftError::Config(format!(
                "number_of_floors must be at least 2, got {}",
                self.number_of_floors
            )));
        }
        if self.car_capacity == 0 {
            return Err(LiftError::Config("car_capacity must be at least 1".into()));
        }
        if !self.car_speed.is_finite() || self.car_speed <= 0.0 {
            return Err(LiftError::Config(format!(
                "car_speed must be positive, got {}",
                self.car_speed
            )));
        }
        if !self.door_delay_secs.is_finite() || self.door_delay_secs < 0.0 {
            return Err(LiftError::Config(format!(
                "door_delay_secs must be non-negative, got {}",
                self.door_delay_secs
            )));
        }
        if !self.passengers_per_minute.is_finite() || self.passengers_per_minute < 0.0 {
            return Err(LiftError::Config(format!(
                "passengers_per_minute must be non-negative, got {}",
                self.passengers_per_minute
            )));
        }
        Ok(())
    }

    /// Index of the topmost floor.
    #[inline]
    pub fn top_floor(&self) -> usize {
        self.number_of_floors.saturating_sub(1)
    }
}
