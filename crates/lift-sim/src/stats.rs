//! Run-level trip statistics.

use std::fmt;

use lift_core::CarId;
use lift_passenger::{PassengerDetails, PassengerObserver};

/// A [`PassengerObserver`] that tallies lifecycle events and trip times.
///
/// Trip time is `exit time - creation_timestamp`; wait time is
/// `boarding time - creation_timestamp`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TripStats {
    pub created:         u64,
    pub boarded:         u64,
    pub delivered:       u64,
    pub total_wait_secs: f64,
    pub max_wait_secs:   f64,
    pub total_trip_secs: f64,
    pub max_trip_secs:   f64,
}

impl TripStats {
    /// Mean time from arrival to boarding, or `None` before anyone boards.
    pub fn mean_wait_secs(&self) -> Option<f64> {
        (self.boarded > 0).then(|| self.total_wait_secs / self.boarded as f64)
    }

    /// Mean time from arrival to delivery, or `None` before any delivery.
    pub fn mean_trip_secs(&self) -> Option<f64> {
        (self.delivered > 0).then(|| self.total_trip_secs / self.delivered as f64)
    }
}

impl PassengerObserver for TripStats {
    fn on_created(&mut self, _passenger: &PassengerDetails) {
        self.created += 1;
    }

    fn on_boarded(&mut self, passenger: &PassengerDetails, _car: CarId, elapsed_secs: f64) {
        let wait = elapsed_secs - passenger.creation_timestamp;
        self.boarded += 1;
        self.total_wait_secs += wait;
        self.max_wait_secs = self.max_wait_secs.max(wait);
    }

    fn on_exited(&mut self, passenger: &PassengerDetails, elapsed_secs: f64) {
        let trip = elapsed_secs - passenger.creation_timestamp;
        self.delivered += 1;
        self.total_trip_secs += trip;
        self.max_trip_secs = self.max_trip_secs.max(trip);
    }
}

impl fmt::Display for TripStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} created, {} boarded, {} delivered",
            self.created, self.boarded, self.delivered
        )?;
        if let Some(wait) = self.mean_wait_secs() {
            write!(f, "; wait mean {wait:.1}s max {:.1}s", self.max_wait_secs)?;
        }
        if let Some(trip) = self.mean_trip_secs() {
            write!(f, "; trip mean {trip:.1}s max {:.1}s", self.max_trip_secs)?;
        }
        Ok(())
    }
}
