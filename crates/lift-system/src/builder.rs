//! Fluent builder for constructing an [`ElevatorSystem`].

use log::info;

use lift_car::ElevatorCar;
use lift_core::{CarState, LiftError, LiftResult, SimConfig, SimRng};
use lift_dispatch::{BasicDispatcher, Dispatcher};

use crate::ElevatorSystem;

/// Fluent builder for [`ElevatorSystem<D>`].
///
/// # Required inputs
///
/// - [`SimConfig`] — floors, cars, capacity, speed, door delay
/// - [`SimRng`] — source of the cars' random starting floors
///
/// # Optional inputs (have defaults)
///
/// | Method                   | Default                                      |
/// |--------------------------|----------------------------------------------|
/// | `.initial_positions(v)`  | Uniformly random whole floor per car         |
/// | `.initial_states(v)`     | Odd index `MovingUp`, even index `MovingDown`|
///
/// # Example
///
/// ```rust,ignore
/// let elevators = ElevatorSystemBuilder::new(config, &mut rng)
///     .initial_positions(vec![0.0, 7.0])
///     .build(BasicDispatcher::new)?;
/// ```
pub struct ElevatorSystemBuilder<'r> {
    config:    SimConfig,
    rng:       &'r mut SimRng,
    positions: Option<Vec<f64>>,
    states:    Option<Vec<CarState>>,
}

impl<'r> ElevatorSystemBuilder<'r> {
    pub fn new(config: SimConfig, rng: &'r mut SimRng) -> Self {
        Self { config, rng, positions: None, states: None }
    }

    /// Supply each car's starting position (must be length `number_of_cars`,
    /// each within `0..=top floor`).
    pub fn initial_positions(mut self, positions: Vec<f64>) -> Self {
        self.positions = Some(positions);
        self
    }

    /// Supply each car's starting motion state (must be length
    /// `number_of_cars`).
    pub fn initial_states(mut self, states: Vec<CarState>) -> Self {
        self.states = Some(states);
        self
    }

    /// Validate inputs and build the fleet with the dispatcher returned by
    /// `factory(number_of_floors, number_of_cars)`.
    pub fn build<D, F>(self, factory: F) -> LiftResult<ElevatorSystem<D>>
    where
        D: Dispatcher,
        F: FnOnce(usize, usize) -> D,
    {
        let Self { config, rng, positions, states } = self;
        config.validate()?;
        let floors = config.number_of_floors;
        let count = config.number_of_cars;
        let top = config.top_floor() as f64;

        let positions = match positions {
            Some(p) => {
                check_len(p.len(), count, "initial positions")?;
                if let Some(bad) = p.iter().find(|&&x| !(0.0..=top).contains(&x)) {
                    return Err(LiftError::Config(format!(
                        "initial position {bad} is outside the shaft (0..={top})"
                    )));
                }
                p
            }
            None => (0..count).map(|_| rng.floor(floors) as f64).collect(),
        };

        let states = match states {
            Some(s) => {
                check_len(s.len(), count, "initial states")?;
                s
            }
            None => (0..count)
                .map(|i| if i % 2 == 1 { CarState::MovingUp } else { CarState::MovingDown })
                .collect(),
        };

        let cars: Vec<ElevatorCar> = positions
            .into_iter()
            .zip(states)
            .map(|(position, state)| {
                ElevatorCar::new(
                    config.car_capacity,
                    config.car_speed,
                    config.door_delay_secs,
                    position,
                    state,
                )
            })
            .collect();

        info!(
            "elevator system: {count} cars, {floors} floors, capacity {}, speed {} floors/s, door delay {} s",
            config.car_capacity, config.car_speed, config.door_delay_secs
        );

        Ok(ElevatorSystem {
            cars,
            number_of_floors: floors,
            dispatcher: factory(floors, count),
            last_elapsed: 0.0,
        })
    }

    /// [`build`](Self::build) with the [`BasicDispatcher`] policy.
    pub fn build_basic(self) -> LiftResult<ElevatorSystem<BasicDispatcher>> {
        self.build(BasicDispatcher::new)
    }
}

fn check_len(got: usize, expected: usize, what: &str) -> LiftResult<()> {
    if got != expected {
        return Err(LiftError::Config(format!(
            "{what} length {got} does not match car count {expected}"
        )));
    }
    Ok(())
}
