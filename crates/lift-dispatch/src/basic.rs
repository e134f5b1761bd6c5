//! `BasicDispatcher` — per-car collective control.
//!
//! Every car is dispatched on its own state, its own committed stops, and the
//! shared call board.  There is no fleet-wide assignment: two cars may both
//! head for the same call, and whichever opens its door first serves it.

use log::{debug, trace};

use lift_car::ElevatorCar;
use lift_core::{CarId, CarState, Direction};

use crate::{CallBoard, Dispatcher, StopQueue};

/// Dispatcher bookkeeping for one car.
#[derive(Debug, Clone)]
struct CarQueues {
    up:             StopQueue,
    down:           StopQueue,
    /// Elapsed time at which the door last opened; `None` while closed.
    door_opened_at: Option<f64>,
}

impl CarQueues {
    fn new() -> Self {
        Self {
            up:             StopQueue::new(Direction::Up),
            down:           StopQueue::new(Direction::Down),
            door_opened_at: None,
        }
    }

    /// The queue a car in `state` draws its next stop from.
    ///
    /// Only called for moving cars; an idle car has no queue of its own and
    /// reads as the down-queue.
    fn for_state(&mut self, state: CarState) -> &mut StopQueue {
        match state {
            CarState::MovingUp => &mut self.up,
            _                  => &mut self.down,
        }
    }
}

/// The reference dispatch policy.
///
/// Idle cars always head for the top floor.  Moving cars sweep toward the
/// terminal in their direction, stopping for committed stops and for hall
/// calls in their direction that lie ahead, and reverse at the terminals.
#[derive(Debug, Clone)]
pub struct BasicDispatcher {
    number_of_floors: usize,
    cars:             Vec<CarQueues>,
    calls:            CallBoard,
}

impl BasicDispatcher {
    /// A dispatcher for `number_of_cars` cars in a `number_of_floors` building.
    pub fn new(number_of_floors: usize, number_of_cars: usize) -> Self {
        Self {
            number_of_floors,
            cars: (0..number_of_cars).map(|_| CarQueues::new()).collect(),
            calls: CallBoard::new(number_of_floors),
        }
    }

    /// `true` if a hall call is pending at `floor` for `direction`.
    pub fn is_called(&self, floor: usize, direction: Direction) -> bool {
        self.calls.is_set(floor, direction)
    }

    /// Committed stops of `car` in `direction`, in travel order.
    pub fn committed_stops(&self, car: CarId, direction: Direction) -> Vec<usize> {
        let Some(queues) = self.cars.get(car.index()) else {
            return vec![];
        };
        match direction {
            Direction::Up   => queues.up.floors(),
            Direction::Down => queues.down.floors(),
        }
    }

    /// Elapsed time at which `car`'s door opened, if it is open.
    pub fn door_opened_at(&self, car: CarId) -> Option<f64> {
        self.cars.get(car.index()).and_then(|q| q.door_opened_at)
    }

    #[inline]
    fn top_floor(&self) -> usize {
        self.number_of_floors - 1
    }

    // ── Phases ────────────────────────────────────────────────────────────

    fn dispatch_car(&mut self, id: CarId, car: &mut ElevatorCar, elapsed_secs: f64) {
        if car.is_open() {
            self.close_if_due(id, car, elapsed_secs);
            return;
        }
        if car.state() != CarState::Idle && car.at_destination() && self.arrive(id, car, elapsed_secs) {
            return;
        }
        self.cruise(id, car);
    }

    /// ① Door-open phase.
    fn close_if_due(&mut self, id: CarId, car: &mut ElevatorCar, elapsed_secs: f64) {
        let queues = &mut self.cars[id.index()];
        let due = queues
            .door_opened_at
            .is_none_or(|opened| opened + car.door_delay() <= elapsed_secs);
        if !due {
            return;
        }

        let floor = floor_of(car.position());
        car.close_door();
        queues.door_opened_at = None;
        if let Some(direction) = car.state().direction() {
            self.calls.clear(floor, direction);
        }
        debug!("{id}: door closed at floor {floor} (t={elapsed_secs:.3})");
    }

    /// ② Arrival phase.  Returns `true` if the door opened.
    fn arrive(&mut self, id: CarId, car: &mut ElevatorCar, elapsed_secs: f64) -> bool {
        let floor = floor_of(car.position());
        let arriving = car.state();
        let top = self.top_floor();

        if floor == top && arriving == CarState::MovingUp {
            car.command_down(None);
        } else if floor == 0 && arriving == CarState::MovingDown {
            car.command_up(None);
        }

        // Hall calls are matched against the direction the car leaves in;
        // committed stops live in the queue of the direction it arrived in.
        let called = car
            .state()
            .direction()
            .is_some_and(|direction| self.calls.is_set(floor, direction));
        let queues = &mut self.cars[id.index()];
        let queue = queues.for_state(arriving);
        let committed = queue.front() == Some(floor);

        if !(called || committed) {
            trace!("{id}: passing floor {floor} without stopping");
            return false;
        }

        car.open_door();
        let drained = queue.pop_front_if(floor);
        queues.door_opened_at = Some(elapsed_secs);
        debug!(
            "{id}: door opened at floor {floor} heading {} (call={called}, stops drained={drained}, t={elapsed_secs:.3})",
            car.state()
        );
        true
    }

    /// ③ Cruising / idle phase.
    ///
    /// Calls are searched strictly ahead of the car.  A call at the floor the
    /// car stands on waits for the next pass.
    fn cruise(&mut self, id: CarId, car: &mut ElevatorCar) {
        let position = car.position();
        let top = self.top_floor();
        let queues = &self.cars[id.index()];

        match car.state() {
            CarState::Idle => {
                car.command_up(Some(top));
            }
            CarState::MovingUp => {
                let next_stop = queues.up.front();
                let next_call = self.calls.nearest_up_from(position.floor().max(0.0) as usize + 1);
                match (next_call, next_stop) {
                    (Some(call), stop) if stop.is_none_or(|stop| call < stop) => {
                        car.command_up(Some(call));
                    }
                    (_, Some(stop)) => car.command_up(Some(stop)),
                    _ if position != top as f64 => car.command_up(Some(top)),
                    _ => car.command_down(Some(0)),
                }
            }
            CarState::MovingDown => {
                let next_stop = queues.down.front();
                let next_call = (position.ceil().max(0.0) as usize)
                    .checked_sub(1)
                    .and_then(|from| self.calls.nearest_down_from(from));
                match (next_call, next_stop) {
                    (Some(call), stop) if stop.is_none_or(|stop| call > stop) => {
                        car.command_down(Some(call));
                    }
                    (_, Some(stop)) => car.command_down(Some(stop)),
                    _ if position != 0.0 => car.command_down(Some(0)),
                    _ => car.command_up(Some(top)),
                }
            }
        }
        trace!("{id}: {} toward {:?} from {position:.3}", car.state(), car.destination());
    }
}

impl Dispatcher for BasicDispatcher {
    fn request_floor_from_car(&mut self, car: CarId, state: &ElevatorCar, floor: usize) {
        debug!("request: {car} -> floor {floor}");
        let queues = &mut self.cars[car.index()];
        if floor as f64 > state.position() {
            queues.up.push(floor);
        } else {
            queues.down.push(floor);
        }
    }

    fn call_for_car(&mut self, floor: usize, direction: Direction) {
        if !self.calls.is_set(floor, direction) {
            debug!("call: floor {floor} {direction:?}");
            self.calls.set(floor, direction);
        }
    }

    fn tick(&mut self, cars: &mut [ElevatorCar], _delta_secs: f64, elapsed_secs: f64) {
        for (i, car) in cars.iter_mut().enumerate() {
            self.dispatch_car(CarId(i as u32), car, elapsed_secs);
        }
    }
}

/// Whole floor a car is standing at.
#[inline]
fn floor_of(position: f64) -> usize {
    position.round().max(0.0) as usize
}
