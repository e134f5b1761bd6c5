//! The `Simulation` struct and its frame loop.

use log::info;

use lift_car::CarDetails;
use lift_core::{CarId, Direction, PassengerId, SimClock, SimConfig};
use lift_dispatch::Dispatcher;
use lift_passenger::{PassengerDetails, PassengerObserver, PassengerSystem};
use lift_system::ElevatorSystem;

use crate::{SimError, SimResult};

/// The main simulation runner.
///
/// Holds the clock, the elevator fleet and the passenger population, and
/// advances all three together one frame at a time.  Frame length is chosen
/// by the caller on every [`step`](Self::step); nothing here reads a wall
/// clock.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Simulation<D: Dispatcher> {
    pub(crate) config:     SimConfig,
    pub(crate) clock:      SimClock,
    pub(crate) elevators:  ElevatorSystem<D>,
    pub(crate) passengers: PassengerSystem,
}

impl<D: Dispatcher> Simulation<D> {
    // ── Frame loop ────────────────────────────────────────────────────────

    /// Advance one frame of `delta_secs` simulated seconds.
    ///
    /// # Errors
    /// `LiftError::InvalidTime` (wrapped) if `delta_secs` is negative or not
    /// finite.  The clock does not advance in that case.
    pub fn step<O: PassengerObserver>(&mut self, delta_secs: f64, observer: &mut O) -> SimResult<()> {
        let mut clock = self.clock;
        let elapsed = clock.advance(delta_secs)?;
        self.elevators.tick(delta_secs, elapsed)?;
        self.clock = clock;
        self.passengers.tick(&mut self.elevators, observer, elapsed)?;
        Ok(())
    }

    /// Step fixed frames of `frame_secs` until `duration_secs` more simulated
    /// seconds have passed.  Returns the number of frames run.
    ///
    /// `duration_secs` is rounded to a whole number of frames.
    pub fn run_for<O: PassengerObserver>(
        &mut self,
        duration_secs: f64,
        frame_secs:    f64,
        observer:      &mut O,
    ) -> SimResult<u64> {
        if !frame_secs.is_finite() || frame_secs <= 0.0 {
            return Err(SimError::Config(format!(
                "frame length must be positive, got {frame_secs}"
            )));
        }
        if !duration_secs.is_finite() || duration_secs < 0.0 {
            return Err(SimError::Config(format!(
                "run duration must be non-negative, got {duration_secs}"
            )));
        }
        let frames = (duration_secs / frame_secs).round() as u64;
        for _ in 0..frames {
            self.step(frame_secs, observer)?;
        }
        info!(
            "ran {frames} frames to {}: {} created, {} delivered, {} waiting",
            self.clock,
            self.passengers.created_count(),
            self.passengers.delivered_count(),
            self.passengers.waiting_count(),
        );
        Ok(frames)
    }

    // ── Queries ───────────────────────────────────────────────────────────

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn clock(&self) -> SimClock {
        self.clock
    }

    #[inline]
    pub fn elapsed_secs(&self) -> f64 {
        self.clock.elapsed_secs()
    }

    pub fn elevators(&self) -> &ElevatorSystem<D> {
        &self.elevators
    }

    pub fn passengers(&self) -> &PassengerSystem {
        &self.passengers
    }

    pub fn car_details(&self) -> Vec<CarDetails> {
        self.elevators.car_details()
    }

    pub fn passenger_details(&self) -> Vec<PassengerDetails> {
        self.passengers.passenger_details()
    }

    pub fn number_of_floors(&self) -> usize {
        self.elevators.number_of_floors()
    }

    // ── Commands ──────────────────────────────────────────────────────────

    pub fn request_floor_from_car(&mut self, car: CarId, floor: usize) -> SimResult<()> {
        Ok(self.elevators.request_floor_from_car(car, floor)?)
    }

    pub fn call_for_car(&mut self, floor: usize, direction: Direction) -> SimResult<()> {
        Ok(self.elevators.call_for_car(floor, direction)?)
    }

    pub fn update_car_speed(&mut self, speed: f64) -> SimResult<()> {
        Ok(self.elevators.update_car_speed(speed)?)
    }

    pub fn update_passengers_per_minute(&mut self, rate: f64) -> SimResult<()> {
        Ok(self.passengers.update_passengers_per_minute(rate)?)
    }

    /// Inject a passenger with an explicit trip at the current simulated time.
    pub fn spawn<O: PassengerObserver>(
        &mut self,
        start:       usize,
        destination: usize,
        observer:    &mut O,
    ) -> SimResult<Option<PassengerId>> {
        let elapsed = self.clock.elapsed_secs();
        Ok(self.passengers.spawn(&mut self.elevators, observer, start, destination, elapsed)?)
    }
}
