//! The `ElevatorCar` state machine.

use lift_core::CarState;

/// One car in the shaft.
///
/// # Invariant
///
/// `destination` is only ever `Some` while `state != Idle`; it is cleared by
/// [`close_door`](Self::close_door) and [`command_idle`](Self::command_idle).
#[derive(Debug, Clone, PartialEq)]
pub struct ElevatorCar {
    capacity:     usize,
    door_delay:   f64,
    speed:        f64,
    position:     f64,
    state:        CarState,
    destination:  Option<usize>,
    door_open:    bool,
}

impl ElevatorCar {
    /// A car parked at `position` in `state`, door closed, no destination.
    pub fn new(capacity: usize, speed: f64, door_delay: f64, position: f64, state: CarState) -> Self {
        Self {
            capacity,
            door_delay,
            speed,
            position,
            state,
            destination: None,
            door_open:   false,
        }
    }

    // ── Queries ───────────────────────────────────────────────────────────

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Seconds the door stays open once opened.
    #[inline]
    pub fn door_delay(&self) -> f64 {
        self.door_delay
    }

    #[inline]
    pub fn speed(&self) -> f64 {
        self.speed
    }

    /// Continuous floor coordinate.
    #[inline]
    pub fn position(&self) -> f64 {
        self.position
    }

    #[inline]
    pub fn state(&self) -> CarState {
        self.state
    }

    #[inline]
    pub fn destination(&self) -> Option<usize> {
        self.destination
    }

    #[inline]
    pub fn is_open(&self) -> bool {
        self.door_open
    }

    /// `true` when the car sits exactly on its destination floor.
    #[inline]
    pub fn at_destination(&self) -> bool {
        self.destination.is_some_and(|d| self.position == d as f64)
    }

    // ── Physics ───────────────────────────────────────────────────────────

    /// Advance toward the destination by `speed * delta_secs` floors.
    ///
    /// Idle cars, cars with an open door, and cars without a destination do
    /// not move.  The new position never overshoots the destination.
    pub fn tick(&mut self, delta_secs: f64) {
        if self.state == CarState::Idle || self.door_open {
            return;
        }
        let Some(destination) = self.destination else {
            return;
        };
        let target = destination as f64;
        let movement = delta_secs * self.speed;
        self.position = if target > self.position {
            (self.position + movement).min(target)
        } else {
            (self.position - movement).max(target)
        };
    }

    // ── Commands ──────────────────────────────────────────────────────────

    pub fn open_door(&mut self) {
        self.door_open = true;
    }

    /// Close the door.  The destination just served is forgotten.
    pub fn close_door(&mut self) {
        self.door_open = false;
        self.destination = None;
    }

    /// Head up toward `destination`.  `None` means "up, destination pending".
    pub fn command_up(&mut self, destination: Option<usize>) {
        self.state = CarState::MovingUp;
        self.destination = destination;
    }

    /// Head down toward `destination`.  `None` means "down, destination pending".
    pub fn command_down(&mut self, destination: Option<usize>) {
        self.state = CarState::MovingDown;
        self.destination = destination;
    }

    pub fn command_idle(&mut self) {
        self.state = CarState::Idle;
        self.destination = None;
    }

    /// Live tuning hook.
    pub fn update_speed(&mut self, speed: f64) {
        self.speed = speed;
    }
}
