//! Passenger lifecycle notifications.

use lift_core::CarId;

use crate::PassengerDetails;

/// Callbacks invoked synchronously by
/// [`PassengerSystem`][crate::PassengerSystem] as passengers move through
/// their lifecycle.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example — delivery logger
///
/// ```rust,ignore
/// struct DeliveryLog;
///
/// impl PassengerObserver for DeliveryLog {
///     fn on_exited(&mut self, passenger: &PassengerDetails, elapsed_secs: f64) {
///         println!("delivered {} at t={elapsed_secs:.1}", passenger.id);
///     }
/// }
/// ```
pub trait PassengerObserver {
    /// A passenger joined the population at its starting floor.
    fn on_created(&mut self, _passenger: &PassengerDetails) {}

    /// A waiting passenger stepped into `car`.  `passenger.elevator_index` is
    /// already set.
    fn on_boarded(&mut self, _passenger: &PassengerDetails, _car: CarId, _elapsed_secs: f64) {}

    /// A passenger reached its destination.  Fired exactly once per
    /// passenger, in the same tick it leaves the population.
    fn on_exited(&mut self, _passenger: &PassengerDetails, _elapsed_secs: f64) {}
}

/// A [`PassengerObserver`] that does nothing.
pub struct NoopObserver;

impl PassengerObserver for NoopObserver {}

/// Adapts a plain `FnMut(&PassengerDetails, elapsed_secs)` into an observer
/// that only listens for deliveries.
pub struct OnExit<F>(pub F);

impl<F: FnMut(&PassengerDetails, f64)> PassengerObserver for OnExit<F> {
    fn on_exited(&mut self, passenger: &PassengerDetails, elapsed_secs: f64) {
        (self.0)(passenger, elapsed_secs);
    }
}
