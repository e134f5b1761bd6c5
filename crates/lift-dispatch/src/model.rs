//! The `Dispatcher` trait — the extension point for dispatch policies.

use lift_car::ElevatorCar;
use lift_core::{CarId, Direction};

/// Pluggable dispatch policy.
///
/// A dispatcher owns whatever bookkeeping it needs (call flags, stop queues,
/// door timers) and drives the fleet by issuing commands to the cars it is
/// handed each tick.  It never sees passengers.
///
/// Inputs reaching a dispatcher have already been validated by
/// `ElevatorSystem`: `car` indexes the fleet and every floor lies inside the
/// building.
///
/// # Example
///
/// ```rust,ignore
/// struct ParkEverything;
///
/// impl Dispatcher for ParkEverything {
///     fn request_floor_from_car(&mut self, _: CarId, _: &ElevatorCar, _: usize) {}
///     fn call_for_car(&mut self, _: usize, _: Direction) {}
///     fn tick(&mut self, cars: &mut [ElevatorCar], _: f64, _: f64) {
///         cars.iter_mut().for_each(ElevatorCar::command_idle);
///     }
/// }
/// ```
pub trait Dispatcher: 'static {
    /// A passenger inside `car` asked to be taken to `floor`.
    fn request_floor_from_car(&mut self, car: CarId, state: &ElevatorCar, floor: usize);

    /// Someone at `floor` wants to travel in `direction`.
    fn call_for_car(&mut self, floor: usize, direction: Direction);

    /// Decide and issue this tick's command for every car.
    ///
    /// Called before any car moves, so every decision sees the positions
    /// reached at the end of the previous tick.
    fn tick(&mut self, cars: &mut [ElevatorCar], delta_secs: f64, elapsed_secs: f64);
}

impl<D: Dispatcher + ?Sized> Dispatcher for Box<D> {
    fn request_floor_from_car(&mut self, car: CarId, state: &ElevatorCar, floor: usize) {
        (**self).request_floor_from_car(car, state, floor);
    }

    fn call_for_car(&mut self, floor: usize, direction: Direction) {
        (**self).call_for_car(floor, direction);
    }

    fn tick(&mut self, cars: &mut [ElevatorCar], delta_secs: f64, elapsed_secs: f64) {
        (**self).tick(cars, delta_secs, elapsed_secs);
    }
}
