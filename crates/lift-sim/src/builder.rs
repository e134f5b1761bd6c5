//! Fluent builder for constructing a [`Simulation`].

use log::info;

use lift_core::{CarState, SimClock, SimConfig, SimRng};
use lift_dispatch::{BasicDispatcher, Dispatcher};
use lift_passenger::PassengerSystem;
use lift_system::ElevatorSystemBuilder;

use crate::{SimError, SimResult, Simulation};

/// Child-stream offsets drawn from the root RNG, in derivation order.
const CAR_STREAM:       u64 = 0;
const PASSENGER_STREAM: u64 = 1;

/// Fluent builder for [`Simulation<D>`].
///
/// # Optional inputs (have defaults)
///
/// | Method                   | Default                                   |
/// |--------------------------|-------------------------------------------|
/// | `.initial_positions(v)`  | Uniformly random whole floor per car      |
/// | `.initial_states(v)`     | Odd index `MovingUp`, even `MovingDown`   |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(config)
///     .initial_positions(vec![0.0, 7.0])
///     .build(|floors, cars| BasicDispatcher::new(floors, cars))?;
/// sim.run_for(60.0, 0.1, &mut NoopObserver)?;
/// ```
pub struct SimBuilder {
    config:    SimConfig,
    positions: Option<Vec<f64>>,
    states:    Option<Vec<CarState>>,
}

impl SimBuilder {
    pub fn new(config: SimConfig) -> Self {
        Self { config, positions: None, states: None }
    }

    /// Place each car at a given floor coordinate (must be length
    /// `number_of_cars`, every value inside the shaft).
    pub fn initial_positions(mut self, positions: Vec<f64>) -> Self {
        self.positions = Some(positions);
        self
    }

    /// Start each car in a given motion state (must be length
    /// `number_of_cars`).
    pub fn initial_states(mut self, states: Vec<CarState>) -> Self {
        self.states = Some(states);
        self
    }

    /// Validate inputs, derive the RNG streams, and return a ready-to-run
    /// [`Simulation`] driven by the dispatcher `factory` produces.
    ///
    /// `factory` receives `(number_of_floors, number_of_cars)`.
    pub fn build<D, F>(self, factory: F) -> SimResult<Simulation<D>>
    where
        D: Dispatcher,
        F: FnOnce(usize, usize) -> D,
    {
        let Self { config, positions, states } = self;
        config.validate()?;

        let cars = config.number_of_cars;
        if let Some(p) = &positions {
            check_len(cars, p.len(), "initial positions")?;
        }
        if let Some(s) = &states {
            check_len(cars, s.len(), "initial states")?;
        }

        // Streams are derived in a fixed order so each one depends only on
        // the seed.
        let mut root = SimRng::new(config.seed);
        let mut car_rng = root.child(CAR_STREAM);
        let passenger_rng = root.child(PASSENGER_STREAM);

        let mut elevators = ElevatorSystemBuilder::new(config.clone(), &mut car_rng);
        if let Some(p) = positions {
            elevators = elevators.initial_positions(p);
        }
        if let Some(s) = states {
            elevators = elevators.initial_states(s);
        }
        let elevators = elevators.build(factory)?;
        let passengers = PassengerSystem::new(&config, passenger_rng)?;

        info!(
            "simulation ready: seed {}, {} passengers/min, cap {}",
            config.seed, config.passengers_per_minute, config.max_passengers
        );
        Ok(Simulation { config, clock: SimClock::new(), elevators, passengers })
    }

    /// [`build`](Self::build) with the reference [`BasicDispatcher`].
    pub fn build_basic(self) -> SimResult<Simulation<BasicDispatcher>> {
        self.build(BasicDispatcher::new)
    }
}

fn check_len(expected: usize, got: usize, what: &'static str) -> SimResult<()> {
    if got != expected {
        return Err(SimError::CarCountMismatch { expected, got, what });
    }
    Ok(())
}
