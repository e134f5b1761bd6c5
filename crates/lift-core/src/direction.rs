//! Travel directions and car motion states.

use std::fmt;

/// Direction of a floor call, or of a passenger's trip.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    /// Direction of travel from `start` to `destination`.
    ///
    /// Anything that is not strictly upward counts as `Down`.
    #[inline]
    pub fn of_trip(start: usize, destination: usize) -> Direction {
        if destination > start { Direction::Up } else { Direction::Down }
    }
}

/// Motion state of a single car.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CarState {
    #[default]
    Idle,
    MovingUp,
    MovingDown,
}

impl CarState {
    /// The direction this state travels in, or `None` when idle.
    #[inline]
    pub fn direction(self) -> Option<Direction> {
        match self {
            CarState::Idle       => None,
            CarState::MovingUp   => Some(Direction::Up),
            CarState::MovingDown => Some(Direction::Down),
        }
    }

    /// `true` if a passenger travelling in `direction` may board a car in
    /// this state.  Idle cars never match.
    #[inline]
    pub fn serves(self, direction: Direction) -> bool {
        self.direction() == Some(direction)
    }
}

impl From<Direction> for CarState {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::Up   => CarState::MovingUp,
            Direction::Down => CarState::MovingDown,
        }
    }
}

impl fmt::Display for CarState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            CarState::Idle       => "idle",
            CarState::MovingUp   => "up",
            CarState::MovingDown => "down",
        };
        f.write_str(s)
    }
}
