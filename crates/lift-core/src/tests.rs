//! Unit tests for lift-core primitives.

#[cfg(test)]
mod ids {
    use crate::{CarId, PassengerId};

    #[test]
    fn index_roundtrip() {
        let id = CarId(3);
        assert_eq!(id.index(), 3);
        assert_eq!(CarId::try_from(3usize).unwrap(), id);
    }

    #[test]
    fn passenger_ids_are_ordered_and_advance() {
        let first = PassengerId(0);
        assert!(first < first.next());
        assert_eq!(first.next(), PassengerId(1));
    }

    #[test]
    fn display() {
        assert_eq!(CarId(7).to_string(), "CarId(7)");
        assert_eq!(PassengerId(12).to_string(), "PassengerId(12)");
    }
}

#[cfg(test)]
mod direction {
    use crate::{CarState, Direction};

    #[test]
    fn trip_direction_is_derived() {
        assert_eq!(Direction::of_trip(0, 3), Direction::Up);
        assert_eq!(Direction::of_trip(5, 2), Direction::Down);
    }

    #[test]
    fn states_serve_matching_direction_only() {
        assert!(CarState::MovingUp.serves(Direction::Up));
        assert!(!CarState::MovingUp.serves(Direction::Down));
        assert!(CarState::MovingDown.serves(Direction::Down));
        assert!(!CarState::Idle.serves(Direction::Up));
        assert!(!CarState::Idle.serves(Direction::Down));
    }

    #[test]
    fn state_from_direction() {
        assert_eq!(CarState::from(Direction::Up), CarState::MovingUp);
        assert_eq!(CarState::from(Direction::Down), CarState::MovingDown);
        assert_eq!(CarState::default(), CarState::Idle);
    }
}

#[cfg(test)]
mod time {
    use crate::{LiftError, SimClock};

    #[test]
    fn clock_accumulates_frames() {
        let mut clock = SimClock::new();
        assert_eq!(clock.advance(0.5).unwrap(), 0.5);
        assert_eq!(clock.advance(0.25).unwrap(), 0.75);
        assert_eq!(clock.frame(), 2);
        assert_eq!(clock.elapsed_secs(), 0.75);
    }

    #[test]
    fn zero_length_frame_is_allowed() {
        let mut clock = SimClock::new();
        clock.advance(0.0).unwrap();
        assert_eq!(clock.frame(), 1);
        assert_eq!(clock.elapsed_secs(), 0.0);
    }

    #[test]
    fn negative_and_nan_frames_rejected() {
        let mut clock = SimClock::new();
        assert!(matches!(clock.advance(-1.0), Err(LiftError::InvalidTime(_))));
        assert!(matches!(clock.advance(f64::NAN), Err(LiftError::InvalidTime(_))));
        assert_eq!(clock.frame(), 0);
    }

    #[test]
    fn display() {
        let mut clock = SimClock::new();
        clock.advance(1.5).unwrap();
        assert_eq!(clock.to_string(), "F1 (t=1.500s)");
    }
}

#[cfg(test)]
mod config {
    use crate::{LiftError, SimConfig};

    #[test]
    fn default_is_valid() {
        let config = SimConfig::default();
        config.validate().unwrap();
        assert_eq!(config.top_floor(), 7);
    }

    #[test]
    fn zero_cars_rejected() {
        let config = SimConfig { number_of_cars: 0, ..SimConfig::default() };
        assert!(matches!(config.validate(), Err(LiftError::Config(_))));
    }

    #[test]
    fn single_floor_rejected() {
        let config = SimConfig { number_of_floors: 1, ..SimConfig::default() };
        assert!(matches!(config.validate(), Err(LiftError::Config(_))));
    }

    #[test]
    fn non_positive_speed_and_capacity_rejected() {
        let slow = SimConfig { car_speed: 0.0, ..SimConfig::default() };
        assert!(slow.validate().is_err());
        let tiny = SimConfig { car_capacity: 0, ..SimConfig::default() };
        assert!(tiny.validate().is_err());
        let negative_delay = SimConfig { door_delay_secs: -1.0, ..SimConfig::default() };
        assert!(negative_delay.validate().is_err());
    }

    #[test]
    fn zero_rate_is_valid() {
        let config = SimConfig { passengers_per_minute: 0.0, ..SimConfig::default() };
        config.validate().unwrap();
    }
}

#[cfg(test)]
mod rng {
    use crate::SimRng;

    #[test]
    fn same_seed_same_stream() {
        let mut a = SimRng::new(99);
        let mut b = SimRng::new(99);
        for _ in 0..50 {
            assert_eq!(a.floor(10), b.floor(10));
        }
    }

    #[test]
    fn children_are_reproducible() {
        let mut a = SimRng::new(7);
        let mut b = SimRng::new(7);
        let mut ca = a.child(1);
        let mut cb = b.child(1);
        for _ in 0..20 {
            assert_eq!(ca.floor(1000), cb.floor(1000));
        }
    }

    #[test]
    fn floor_except_never_returns_excluded() {
        let mut rng = SimRng::new(3);
        for excluded in 0..5 {
            for _ in 0..200 {
                let f = rng.floor_except(5, excluded);
                assert_ne!(f, excluded);
                assert!(f < 5);
            }
        }
    }

    #[test]
    fn floor_except_two_floors_is_forced() {
        let mut rng = SimRng::new(0);
        for _ in 0..20 {
            assert_eq!(rng.floor_except(2, 0), 1);
            assert_eq!(rng.floor_except(2, 1), 0);
        }
    }
}
