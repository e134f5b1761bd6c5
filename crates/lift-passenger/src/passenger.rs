//! The `Passenger` entity and its snapshot.

use lift_core::{CarId, Direction, LiftError, LiftResult, PassengerId};

/// One rider.
///
/// Origin, destination and creation time are fixed at construction.  The
/// only mutation is boarding, which happens at most once.
#[derive(Debug, Clone, PartialEq)]
pub struct Passenger {
    id:                 PassengerId,
    creation_timestamp: f64,
    starting_floor:     usize,
    destination_floor:  usize,
    elevator_index:     Option<CarId>,
}

impl Passenger {
    /// A waiting passenger.
    ///
    /// # Errors
    /// `LiftError::InvalidTrip` if `starting_floor == destination_floor`.
    pub fn new(
        id:                 PassengerId,
        creation_timestamp: f64,
        starting_floor:     usize,
        destination_floor:  usize,
    ) -> LiftResult<Self> {
        if starting_floor == destination_floor {
            return Err(LiftError::InvalidTrip {
                start:       starting_floor,
                destination: destination_floor,
            });
        }
        Ok(Self {
            id,
            creation_timestamp,
            starting_floor,
            destination_floor,
            elevator_index: None,
        })
    }

    #[inline]
    pub fn id(&self) -> PassengerId {
        self.id
    }

    #[inline]
    pub fn creation_timestamp(&self) -> f64 {
        self.creation_timestamp
    }

    #[inline]
    pub fn starting_floor(&self) -> usize {
        self.starting_floor
    }

    #[inline]
    pub fn destination_floor(&self) -> usize {
        self.destination_floor
    }

    /// The car this passenger rides, or `None` while waiting.
    #[inline]
    pub fn elevator_index(&self) -> Option<CarId> {
        self.elevator_index
    }

    #[inline]
    pub fn is_waiting(&self) -> bool {
        self.elevator_index.is_none()
    }

    #[inline]
    pub fn direction(&self) -> Direction {
        Direction::of_trip(self.starting_floor, self.destination_floor)
    }

    /// Board `car`.
    ///
    /// # Errors
    /// `LiftError::AlreadyBoarded` if the passenger is already aboard a car.
    pub fn enter_elevator(&mut self, car: CarId) -> LiftResult<()> {
        if self.elevator_index.is_some() {
            return Err(LiftError::AlreadyBoarded(self.id));
        }
        self.elevator_index = Some(car);
        Ok(())
    }

    pub fn details(&self) -> PassengerDetails {
        PassengerDetails {
            id:                 self.id,
            creation_timestamp: self.creation_timestamp,
            starting_floor:     self.starting_floor,
            destination_floor:  self.destination_floor,
            elevator_index:     self.elevator_index,
        }
    }
}

/// Immutable copy of a passenger, handed to observers and UI collaborators.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PassengerDetails {
    pub id:                 PassengerId,
    pub creation_timestamp: f64,
    pub starting_floor:     usize,
    pub destination_floor:  usize,
    pub elevator_index:     Option<CarId>,
}
