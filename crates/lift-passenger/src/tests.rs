//! Unit tests for lift-passenger.

use lift_car::ElevatorCar;
use lift_core::{CarId, CarState, Direction, LiftError, PassengerId, SimConfig, SimRng};
use lift_dispatch::Dispatcher;
use lift_system::{ElevatorSystem, ElevatorSystemBuilder};

use crate::{NoopObserver, OnExit, Passenger, PassengerDetails, PassengerObserver, PassengerSystem};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Dispatcher that applies a fixed script to every car and records every
/// command it receives.
struct Recorder {
    script:   fn(&mut ElevatorCar, f64),
    calls:    Vec<(usize, Direction)>,
    requests: Vec<(CarId, usize)>,
}

impl Dispatcher for Recorder {
    fn request_floor_from_car(&mut self, car: CarId, _: &ElevatorCar, floor: usize) {
        self.requests.push((car, floor));
    }
    fn call_for_car(&mut self, floor: usize, direction: Direction) {
        self.calls.push((floor, direction));
    }
    fn tick(&mut self, cars: &mut [ElevatorCar], _: f64, elapsed_secs: f64) {
        for car in cars {
            (self.script)(car, elapsed_secs);
        }
    }
}

fn open_doors(car: &mut ElevatorCar, _: f64) {
    car.open_door();
}

fn leave_alone(_: &mut ElevatorCar, _: f64) {}

fn test_config(capacity: usize, floors: usize, ppm: f64) -> SimConfig {
    SimConfig {
        number_of_floors:      floors,
        number_of_cars:        1,
        car_capacity:          capacity,
        car_speed:             1.0,
        door_delay_secs:       1.0,
        passengers_per_minute: ppm,
        ..SimConfig::default()
    }
}

/// One car at `position` in `state`, driven by `script`.
fn one_car(
    config:   &SimConfig,
    position: f64,
    state:    CarState,
    script:   fn(&mut ElevatorCar, f64),
) -> ElevatorSystem<Recorder> {
    let mut rng = SimRng::new(7);
    ElevatorSystemBuilder::new(config.clone(), &mut rng)
        .initial_positions(vec![position])
        .initial_states(vec![state])
        .build(|_, _| Recorder { script, calls: vec![], requests: vec![] })
        .unwrap()
}

fn passengers(config: &SimConfig) -> PassengerSystem {
    PassengerSystem::new(config, SimRng::new(11)).unwrap()
}

/// Records every hook in call order.
#[derive(Default)]
struct Journal {
    created:  Vec<PassengerId>,
    boarded:  Vec<(PassengerId, CarId)>,
    exited:   Vec<(PassengerDetails, f64)>,
}

impl PassengerObserver for Journal {
    fn on_created(&mut self, passenger: &PassengerDetails) {
        self.created.push(passenger.id);
    }
    fn on_boarded(&mut self, passenger: &PassengerDetails, car: CarId, _: f64) {
        assert_eq!(passenger.elevator_index, Some(car));
        self.boarded.push((passenger.id, car));
    }
    fn on_exited(&mut self, passenger: &PassengerDetails, elapsed_secs: f64) {
        self.exited.push((*passenger, elapsed_secs));
    }
}

// ── Passenger entity ──────────────────────────────────────────────────────────

#[cfg(test)]
mod passenger {
    use super::*;

    #[test]
    fn direction_is_derived_from_trip() {
        let up = Passenger::new(PassengerId(0), 0.0, 1, 4).unwrap();
        let down = Passenger::new(PassengerId(1), 0.0, 4, 1).unwrap();
        assert_eq!(up.direction(), Direction::Up);
        assert_eq!(down.direction(), Direction::Down);
    }

    #[test]
    fn same_floor_trip_rejected() {
        assert_eq!(
            Passenger::new(PassengerId(0), 0.0, 2, 2),
            Err(LiftError::InvalidTrip { start: 2, destination: 2 })
        );
    }

    #[test]
    fn boarding_happens_once() {
        let mut p = Passenger::new(PassengerId(3), 1.5, 0, 2).unwrap();
        assert!(p.is_waiting());
        p.enter_elevator(CarId(1)).unwrap();
        assert_eq!(p.elevator_index(), Some(CarId(1)));
        assert_eq!(p.enter_elevator(CarId(2)), Err(LiftError::AlreadyBoarded(PassengerId(3))));
        assert_eq!(p.elevator_index(), Some(CarId(1)));
    }

    #[test]
    fn details_copy_every_field() {
        let mut p = Passenger::new(PassengerId(9), 4.25, 3, 0).unwrap();
        p.enter_elevator(CarId(0)).unwrap();
        let d = p.details();
        assert_eq!(d.id, PassengerId(9));
        assert_eq!(d.creation_timestamp, 4.25);
        assert_eq!((d.starting_floor, d.destination_floor), (3, 0));
        assert_eq!(d.elevator_index, Some(CarId(0)));
    }
}

// ── Demand generation ─────────────────────────────────────────────────────────

#[cfg(test)]
mod demand {
    use super::*;

    #[test]
    fn arrivals_follow_elapsed_time() {
        let config = test_config(4, 6, 60.0);
        let mut elevators = one_car(&config, 0.0, CarState::Idle, leave_alone);
        let mut system = passengers(&config);
        let mut journal = Journal::default();

        system.tick(&mut elevators, &mut journal, 0.5).unwrap();
        assert_eq!(system.created_count(), 0);
        system.tick(&mut elevators, &mut journal, 1.0).unwrap();
        assert_eq!(system.created_count(), 1);
        system.tick(&mut elevators, &mut journal, 3.5).unwrap();
        assert_eq!(system.created_count(), 3);
        assert_eq!(journal.created, vec![PassengerId(0), PassengerId(1), PassengerId(2)]);
    }

    #[test]
    fn every_arrival_places_a_matching_call() {
        let config = test_config(4, 6, 60.0);
        let mut elevators = one_car(&config, 0.0, CarState::Idle, leave_alone);
        let mut system = passengers(&config);
        system.tick(&mut elevators, &mut NoopObserver, 10.0).unwrap();

        let details = system.passenger_details();
        assert_eq!(details.len(), 10);
        let calls = &elevators.dispatcher().calls;
        assert_eq!(calls.len(), 10);
        for (p, &(floor, direction)) in details.iter().zip(calls) {
            assert_ne!(p.starting_floor, p.destination_floor);
            assert!(p.starting_floor < 6 && p.destination_floor < 6);
            assert_eq!(floor, p.starting_floor);
            assert_eq!(direction, Direction::of_trip(p.starting_floor, p.destination_floor));
            assert_eq!(p.elevator_index, None);
        }
    }

    #[test]
    fn zero_rate_creates_nobody() {
        let config = test_config(4, 6, 0.0);
        let mut elevators = one_car(&config, 0.0, CarState::Idle, leave_alone);
        let mut system = passengers(&config);
        system.tick(&mut elevators, &mut NoopObserver, 1000.0).unwrap();
        assert_eq!(system.created_count(), 0);
        assert!(elevators.dispatcher().calls.is_empty());
    }

    #[test]
    fn population_cap_drops_arrivals() {
        let config = SimConfig { max_passengers: 2, ..test_config(4, 6, 60.0) };
        let mut elevators = one_car(&config, 0.0, CarState::Idle, leave_alone);
        let mut system = passengers(&config);
        system.tick(&mut elevators, &mut NoopObserver, 5.0).unwrap();
        assert_eq!(system.created_count(), 2);
        assert_eq!(system.dropped_count(), 3);
        assert_eq!(system.passenger_details().len(), 2);
    }

    #[test]
    fn rate_change_neither_bursts_nor_stalls() {
        let config = test_config(4, 6, 60.0);
        let mut elevators = one_car(&config, 0.0, CarState::Idle, leave_alone);
        let mut system = passengers(&config);
        system.tick(&mut elevators, &mut NoopObserver, 10.0).unwrap();
        assert_eq!(system.created_count(), 10);

        system.update_passengers_per_minute(120.0).unwrap();
        assert_eq!(system.passengers_per_minute(), 120.0);
        system.tick(&mut elevators, &mut NoopObserver, 10.5).unwrap();
        assert_eq!(system.created_count(), 11);

        system.update_passengers_per_minute(0.0).unwrap();
        system.tick(&mut elevators, &mut NoopObserver, 60.0).unwrap();
        assert_eq!(system.created_count(), 11);

        system.update_passengers_per_minute(60.0).unwrap();
        system.tick(&mut elevators, &mut NoopObserver, 61.0).unwrap();
        assert_eq!(system.created_count(), 12);
    }

    #[test]
    fn invalid_rate_rejected() {
        let config = test_config(4, 6, 60.0);
        let mut system = passengers(&config);
        assert_eq!(system.update_passengers_per_minute(-1.0), Err(LiftError::InvalidRate(-1.0)));
        assert!(system.update_passengers_per_minute(f64::NAN).is_err());
        assert_eq!(system.passengers_per_minute(), 60.0);
    }

    #[test]
    fn time_running_backwards_rejected() {
        let config = test_config(4, 6, 60.0);
        let mut elevators = one_car(&config, 0.0, CarState::Idle, leave_alone);
        let mut system = passengers(&config);
        system.tick(&mut elevators, &mut NoopObserver, 5.0).unwrap();
        let err = system.tick(&mut elevators, &mut NoopObserver, 4.0).unwrap_err();
        assert!(matches!(err, LiftError::InvalidTime(_)));
        assert_eq!(system.created_count(), 5);
    }

    #[test]
    fn same_seed_same_trips() {
        let trips = || {
            let config = test_config(4, 10, 60.0);
            let mut elevators = one_car(&config, 0.0, CarState::Idle, leave_alone);
            let mut system = passengers(&config);
            system.tick(&mut elevators, &mut NoopObserver, 30.0).unwrap();
            system
                .passenger_details()
                .iter()
                .map(|p| (p.starting_floor, p.destination_floor))
                .collect::<Vec<_>>()
        };
        assert_eq!(trips(), trips());
    }
}

// ── Spawn ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod spawn {
    use super::*;

    #[test]
    fn spawn_places_call() {
        let config = test_config(4, 6, 0.0);
        let mut elevators = one_car(&config, 0.0, CarState::Idle, leave_alone);
        let mut system = passengers(&config);
        let id = system
            .spawn(&mut elevators, &mut NoopObserver, 4, 1, 2.0)
            .unwrap();
        assert_eq!(id, Some(PassengerId(0)));
        assert_eq!(elevators.dispatcher().calls, vec![(4, Direction::Down)]);
        assert_eq!(system.passenger_details()[0].creation_timestamp, 2.0);
        assert_eq!(system.waiting_count(), 1);
    }

    #[test]
    fn spawn_validates_trip() {
        let config = test_config(4, 6, 0.0);
        let mut elevators = one_car(&config, 0.0, CarState::Idle, leave_alone);
        let mut system = passengers(&config);
        assert_eq!(
            system.spawn(&mut elevators, &mut NoopObserver, 6, 1, 0.0),
            Err(LiftError::InvalidFloor { floor: 6, floors: 6 })
        );
        assert_eq!(
            system.spawn(&mut elevators, &mut NoopObserver, 2, 2, 0.0),
            Err(LiftError::InvalidTrip { start: 2, destination: 2 })
        );
        assert_eq!(system.created_count(), 0);
        assert!(elevators.dispatcher().calls.is_empty());
    }

    #[test]
    fn spawn_respects_cap() {
        let config = SimConfig { max_passengers: 1, ..test_config(4, 6, 0.0) };
        let mut elevators = one_car(&config, 0.0, CarState::Idle, leave_alone);
        let mut system = passengers(&config);
        assert!(system.spawn(&mut elevators, &mut NoopObserver, 0, 1, 0.0).unwrap().is_some());
        assert_eq!(system.spawn(&mut elevators, &mut NoopObserver, 0, 2, 0.0), Ok(None));
        assert_eq!(system.dropped_count(), 1);
    }
}

// ── Boarding and alighting ────────────────────────────────────────────────────

#[cfg(test)]
mod boarding {
    use super::*;

    #[test]
    fn boards_only_matching_direction_at_this_floor() {
        let config = test_config(4, 4, 0.0);
        let mut elevators = one_car(&config, 1.0, CarState::MovingUp, open_doors);
        let mut system = passengers(&config);
        let mut journal = Journal::default();
        system.spawn(&mut elevators, &mut journal, 1, 3, 0.0).unwrap(); // up, here
        system.spawn(&mut elevators, &mut journal, 1, 0, 0.0).unwrap(); // down, here
        system.spawn(&mut elevators, &mut journal, 2, 3, 0.0).unwrap(); // up, elsewhere

        elevators.tick(0.1, 0.1).unwrap();
        system.tick(&mut elevators, &mut journal, 0.1).unwrap();

        assert_eq!(journal.boarded, vec![(PassengerId(0), CarId(0))]);
        assert_eq!(elevators.dispatcher().requests, vec![(CarId(0), 3)]);
        assert_eq!(system.onboard_count(CarId(0)), 1);
        assert_eq!(system.waiting_count(), 2);
    }

    #[test]
    fn idle_car_boards_nobody() {
        let config = test_config(4, 4, 0.0);
        let mut elevators = one_car(&config, 1.0, CarState::Idle, open_doors);
        let mut system = passengers(&config);
        system.spawn(&mut elevators, &mut NoopObserver, 1, 3, 0.0).unwrap();
        system.spawn(&mut elevators, &mut NoopObserver, 1, 0, 0.0).unwrap();

        elevators.tick(0.1, 0.1).unwrap();
        system.tick(&mut elevators, &mut NoopObserver, 0.1).unwrap();
        assert_eq!(system.waiting_count(), 2);
        assert!(elevators.dispatcher().requests.is_empty());
    }

    #[test]
    fn closed_door_boards_nobody() {
        let config = test_config(4, 4, 0.0);
        let mut elevators = one_car(&config, 1.0, CarState::MovingUp, leave_alone);
        let mut system = passengers(&config);
        system.spawn(&mut elevators, &mut NoopObserver, 1, 3, 0.0).unwrap();

        system.tick(&mut elevators, &mut NoopObserver, 0.1).unwrap();
        assert_eq!(system.waiting_count(), 1);
    }

    #[test]
    fn capacity_bounds_boarding_in_creation_order() {
        let config = test_config(2, 4, 0.0);
        let mut elevators = one_car(&config, 1.0, CarState::MovingUp, open_doors);
        let mut system = passengers(&config);
        for destination in [2, 3, 2] {
            system.spawn(&mut elevators, &mut NoopObserver, 1, destination, 0.0).unwrap();
        }

        elevators.tick(0.1, 0.1).unwrap();
        system.tick(&mut elevators, &mut NoopObserver, 0.1).unwrap();

        let details = system.passenger_details();
        assert_eq!(details[0].elevator_index, Some(CarId(0)));
        assert_eq!(details[1].elevator_index, Some(CarId(0)));
        assert_eq!(details[2].elevator_index, None);

        // Still full on the next frame.
        elevators.tick(0.1, 0.2).unwrap();
        system.tick(&mut elevators, &mut NoopObserver, 0.2).unwrap();
        assert_eq!(system.onboard_count(CarId(0)), 2);
    }

    #[test]
    fn rider_left_behind_calls_again() {
        let config = test_config(1, 4, 0.0);
        let mut elevators = one_car(&config, 1.0, CarState::MovingUp, open_doors);
        let mut system = passengers(&config);
        system.spawn(&mut elevators, &mut NoopObserver, 1, 3, 0.0).unwrap();
        system.spawn(&mut elevators, &mut NoopObserver, 1, 2, 0.0).unwrap();
        assert_eq!(elevators.dispatcher().calls.len(), 2);

        elevators.tick(0.1, 0.1).unwrap();
        system.tick(&mut elevators, &mut NoopObserver, 0.1).unwrap();

        assert_eq!(system.onboard_count(CarId(0)), 1);
        assert_eq!(system.waiting_count(), 1);
        let calls = &elevators.dispatcher().calls;
        assert_eq!(calls.len(), 3);
        assert_eq!(calls.last(), Some(&(1, Direction::Up)));
    }

    /// Opens at floor 0 on the first frame, then rides to floor 2 and opens
    /// again on arrival.
    fn shuttle(car: &mut ElevatorCar, elapsed_secs: f64) {
        if car.position() == 0.0 {
            if elapsed_secs == 0.0 {
                car.open_door();
            } else {
                car.close_door();
                car.command_up(Some(2));
            }
        } else if car.at_destination() {
            car.open_door();
        }
    }

    #[test]
    fn exits_free_room_for_boarders() {
        let config = test_config(1, 4, 0.0);
        let mut elevators = one_car(&config, 0.0, CarState::MovingUp, shuttle);
        let mut system = passengers(&config);
        let mut journal = Journal::default();
        system.spawn(&mut elevators, &mut journal, 0, 2, 0.0).unwrap();
        system.spawn(&mut elevators, &mut journal, 2, 3, 0.0).unwrap();
        system.spawn(&mut elevators, &mut journal, 2, 3, 0.0).unwrap();

        let mut elapsed = 0.0;
        elevators.tick(0.0, elapsed).unwrap();
        system.tick(&mut elevators, &mut journal, elapsed).unwrap();
        assert_eq!(journal.boarded, vec![(PassengerId(0), CarId(0))]);

        for _ in 0..3 {
            elapsed += 1.0;
            elevators.tick(1.0, elapsed).unwrap();
            system.tick(&mut elevators, &mut journal, elapsed).unwrap();
        }
        let car = elevators.car_details()[0];
        assert!(car.door_open);
        assert_eq!(car.position, 2.0);

        assert_eq!(journal.exited.len(), 1);
        let (gone, at) = journal.exited[0];
        assert_eq!(gone.id, PassengerId(0));
        assert_eq!(gone.destination_floor, 2);
        assert_eq!(gone.creation_timestamp, 0.0);
        assert_eq!(at, 3.0);

        assert_eq!(system.delivered_count(), 1);
        assert_eq!(system.onboard_count(CarId(0)), 1);
        assert_eq!(system.waiting_count(), 1);
        let details = system.passenger_details();
        assert_eq!(details[0].id, PassengerId(1));
        assert_eq!(details[0].elevator_index, Some(CarId(0)));
    }

    #[test]
    fn exit_closure_fires_once_per_delivery() {
        let config = test_config(1, 4, 0.0);
        let mut elevators = one_car(&config, 0.0, CarState::MovingUp, shuttle);
        let mut system = passengers(&config);
        system.spawn(&mut elevators, &mut NoopObserver, 0, 2, 0.0).unwrap();

        let mut delivered = Vec::new();
        let mut observer = OnExit(|p: &PassengerDetails, _: f64| delivered.push(p.id));
        let mut elapsed = 0.0;
        elevators.tick(0.0, elapsed).unwrap();
        system.tick(&mut elevators, &mut observer, elapsed).unwrap();
        for _ in 0..6 {
            elapsed += 1.0;
            elevators.tick(1.0, elapsed).unwrap();
            system.tick(&mut elevators, &mut observer, elapsed).unwrap();
        }
        drop(observer);
        assert_eq!(delivered, vec![PassengerId(0)]);
        assert!(system.passenger_details().is_empty());
    }
}
