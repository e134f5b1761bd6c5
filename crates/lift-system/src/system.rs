//! The `ElevatorSystem` struct and its tick.

use log::debug;

use lift_car::{CarDetails, ElevatorCar};
use lift_core::time::{check_delta, check_elapsed};
use lift_core::{CarId, Direction, LiftError, LiftResult};
use lift_dispatch::Dispatcher;

/// A fixed fleet of cars serving a fixed number of floors.
///
/// Owns the cars and the active dispatcher.  Cars are mutated only here and
/// by the dispatcher during [`tick`](Self::tick); everything else sees them
/// through [`car_details`](Self::car_details).
///
/// Create via [`ElevatorSystemBuilder`][crate::ElevatorSystemBuilder].
pub struct ElevatorSystem<D: Dispatcher> {
    pub(crate) cars:             Vec<ElevatorCar>,
    pub(crate) number_of_floors: usize,
    pub(crate) dispatcher:       D,
    /// Elapsed time passed to the previous tick.
    pub(crate) last_elapsed:     f64,
}

impl<D: Dispatcher> ElevatorSystem<D> {
    // ── Queries ───────────────────────────────────────────────────────────

    /// One snapshot per car, in car-index order.
    pub fn car_details(&self) -> Vec<CarDetails> {
        self.cars.iter().map(CarDetails::from).collect()
    }

    pub fn number_of_floors(&self) -> usize {
        self.number_of_floors
    }

    pub fn number_of_cars(&self) -> usize {
        self.cars.len()
    }

    /// Read-only access to the active dispatcher (for inspection and tests).
    pub fn dispatcher(&self) -> &D {
        &self.dispatcher
    }

    // ── Tick ──────────────────────────────────────────────────────────────

    /// Run the dispatcher's decision pass, then move every car.
    ///
    /// # Errors
    /// `LiftError::InvalidTime` if `delta_secs` is negative or not finite, or
    /// if `elapsed_secs` is earlier than the previous tick's.  Nothing is
    /// mutated on error.
    pub fn tick(&mut self, delta_secs: f64, elapsed_secs: f64) -> LiftResult<()> {
        check_delta(delta_secs)?;
        check_elapsed(self.last_elapsed, elapsed_secs)?;
        self.last_elapsed = elapsed_secs;

        self.dispatcher.tick(&mut self.cars, delta_secs, elapsed_secs);
        for car in &mut self.cars {
            car.tick(delta_secs);
        }
        Ok(())
    }

    // ── Commands ──────────────────────────────────────────────────────────

    /// A passenger in `car` requests `floor`.
    pub fn request_floor_from_car(&mut self, car: CarId, floor: usize) -> LiftResult<()> {
        self.check_floor(floor)?;
        let state = self.cars.get(car.index()).ok_or(LiftError::InvalidCar {
            car,
            cars: self.cars.len(),
        })?;
        self.dispatcher.request_floor_from_car(car, state, floor);
        Ok(())
    }

    /// Someone at `floor` calls for a car going `direction`.
    pub fn call_for_car(&mut self, floor: usize, direction: Direction) -> LiftResult<()> {
        self.check_floor(floor)?;
        self.dispatcher.call_for_car(floor, direction);
        Ok(())
    }

    /// Live tuning hook: set every car's speed (floors per second).
    ///
    /// Zero parks the fleet in place; negative or non-finite values are
    /// rejected.
    pub fn update_car_speed(&mut self, speed: f64) -> LiftResult<()> {
        if !speed.is_finite() || speed < 0.0 {
            return Err(LiftError::InvalidRate(speed));
        }
        debug!("car speed set to {speed} floors/s");
        for car in &mut self.cars {
            car.update_speed(speed);
        }
        Ok(())
    }

    fn check_floor(&self, floor: usize) -> LiftResult<()> {
        if floor >= self.number_of_floors {
            return Err(LiftError::InvalidFloor { floor, floors: self.number_of_floors });
        }
        Ok(())
    }
}
