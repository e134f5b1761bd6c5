//! Read-only car snapshots.

use lift_core::CarState;

use crate::ElevatorCar;

/// An immutable copy of one car's externally visible state.
///
/// Produced once per frame by `ElevatorSystem::car_details`, in car-index
/// order.  Holding one never borrows the fleet.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CarDetails {
    pub position:  f64,
    pub state:     CarState,
    pub door_open: bool,
    pub capacity:  usize,
}

impl CarDetails {
    /// The floor the car is at, rounded to the floor grid.
    #[inline]
    pub fn floor(&self) -> usize {
        self.position.round().max(0.0) as usize
    }
}

impl From<&ElevatorCar> for CarDetails {
    fn from(car: &ElevatorCar) -> Self {
        Self {
            position:  car.position(),
            state:     car.state(),
            door_open: car.is_open(),
            capacity:  car.capacity(),
        }
    }
}
