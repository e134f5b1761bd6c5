//! The `PassengerSystem` — live population, demand, boarding and alighting.

use log::{debug, info, warn};

use lift_car::CarDetails;
use lift_core::time::check_elapsed;
use lift_core::{CarId, LiftError, LiftResult, PassengerId, SimConfig, SimRng};
use lift_dispatch::Dispatcher;
use lift_system::ElevatorSystem;

use crate::{Passenger, PassengerDetails, PassengerObserver};

/// Owns every passenger that has been created and not yet delivered.
///
/// Each tick it first moves passengers on and off cars whose doors are open,
/// then re-places the hall call of everyone still waiting, then creates this
/// time slice's arrivals.  A car that leaves riders behind at a floor, or
/// closes on someone who arrived during its last open frame, therefore finds
/// the call standing again.
///
/// # Demand model
///
/// Arrivals are deterministic in count: by elapsed time `t` the system has
/// counted `floor(t / interval)` arrivals, `interval = 60 / passengers_per_minute`.
/// Each tick creates the difference since the last tick.  An arrival counted
/// while the population is at `max_passengers` is dropped for good; the
/// counter still advances so a later drop in population never causes a
/// catch-up burst.
pub struct PassengerSystem {
    /// Live population in creation order (first created, first served).
    passengers:            Vec<Passenger>,
    rng:                   SimRng,
    passengers_per_minute: f64,
    max_passengers:        usize,
    next_id:               PassengerId,
    /// Arrivals counted so far by the demand model, dropped ones included.
    expected_arrivals:     u64,
    /// Elapsed time seen by the most recent tick.
    last_elapsed:          f64,
    /// Passengers actually admitted to the population.
    created:               u64,
    delivered:             u64,
    dropped:               u64,
    /// Set while the cap is rejecting arrivals; cleared once there is room.
    at_capacity:           bool,
}

impl PassengerSystem {
    /// An empty population drawing floors from `rng`.
    pub fn new(config: &SimConfig, rng: SimRng) -> LiftResult<Self> {
        config.validate()?;
        Ok(Self {
            passengers:            Vec::new(),
            rng,
            passengers_per_minute: config.passengers_per_minute,
            max_passengers:        config.max_passengers,
            next_id:               PassengerId(0),
            expected_arrivals:     0,
            last_elapsed:          0.0,
            created:               0,
            delivered:             0,
            dropped:               0,
            at_capacity:           false,
        })
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// One snapshot per live passenger, in creation order.
    pub fn passenger_details(&self) -> Vec<PassengerDetails> {
        self.passengers.iter().map(Passenger::details).collect()
    }

    pub fn waiting_count(&self) -> usize {
        self.passengers.iter().filter(|p| p.is_waiting()).count()
    }

    pub fn onboard_count(&self, car: CarId) -> usize {
        self.passengers.iter().filter(|p| p.elevator_index() == Some(car)).count()
    }

    /// Passengers admitted to the population since the run started.
    pub fn created_count(&self) -> u64 {
        self.created
    }

    pub fn delivered_count(&self) -> u64 {
        self.delivered
    }

    /// Arrivals lost to the population cap.
    pub fn dropped_count(&self) -> u64 {
        self.dropped
    }

    pub fn passengers_per_minute(&self) -> f64 {
        self.passengers_per_minute
    }

    // ── Tick ──────────────────────────────────────────────────────────────

    /// Board and alight against the current car snapshot, re-call for the
    /// passengers left waiting, then generate this time slice's arrivals.
    ///
    /// # Errors
    /// `LiftError::InvalidTime` if `elapsed_secs` is earlier than the previous
    /// tick's.  Nothing is mutated in that case.
    pub fn tick<D, O>(
        &mut self,
        elevators:    &mut ElevatorSystem<D>,
        observer:     &mut O,
        elapsed_secs: f64,
    ) -> LiftResult<()>
    where
        D: Dispatcher,
        O: PassengerObserver,
    {
        check_elapsed(self.last_elapsed, elapsed_secs)?;
        self.move_passengers(elevators, observer, elapsed_secs)?;
        self.recall_waiting(elevators)?;
        self.create_passengers(elevators, observer, elapsed_secs)
    }

    // ── Commands ──────────────────────────────────────────────────────────

    /// Live tuning hook.
    ///
    /// The arrival counter is re-based to what the new rate would have
    /// produced by the last tick, so the change causes neither a burst nor a
    /// gap in arrivals.
    pub fn update_passengers_per_minute(&mut self, rate: f64) -> LiftResult<()> {
        if !rate.is_finite() || rate < 0.0 {
            return Err(LiftError::InvalidRate(rate));
        }
        self.passengers_per_minute = rate;
        self.expected_arrivals = self.expected_arrivals_at(self.last_elapsed);
        debug!("passenger rate set to {rate}/min");
        Ok(())
    }

    /// Create a passenger with an explicit trip, as if it had just arrived.
    ///
    /// Subject to the same population cap as generated arrivals; returns
    /// `Ok(None)` if the passenger was turned away.  Does not touch the
    /// demand counter.
    pub fn spawn<D, O>(
        &mut self,
        elevators:    &mut ElevatorSystem<D>,
        observer:     &mut O,
        start:        usize,
        destination:  usize,
        elapsed_secs: f64,
    ) -> LiftResult<Option<PassengerId>>
    where
        D: Dispatcher,
        O: PassengerObserver,
    {
        let floors = elevators.number_of_floors();
        for floor in [start, destination] {
            if floor >= floors {
                return Err(LiftError::InvalidFloor { floor, floors });
            }
        }
        if start == destination {
            return Err(LiftError::InvalidTrip { start, destination });
        }
        if !self.has_room() {
            self.drop_arrival();
            return Ok(None);
        }
        self.admit(elevators, observer, start, destination, elapsed_secs).map(Some)
    }

    // ── Internals ─────────────────────────────────────────────────────────

    fn move_passengers<D, O>(
        &mut self,
        elevators:    &mut ElevatorSystem<D>,
        observer:     &mut O,
        elapsed_secs: f64,
    ) -> LiftResult<()>
    where
        D: Dispatcher,
        O: PassengerObserver,
    {
        let cars: Vec<CarDetails> = elevators.car_details();
        for (index, car) in cars.iter().enumerate() {
            if !car.door_open {
                continue;
            }
            let car_id = CarId(index as u32);
            let floor = car.floor();
            let onboard = self.onboard_count(car_id);

            let (exiting, staying): (Vec<Passenger>, Vec<Passenger>) =
                std::mem::take(&mut self.passengers)
                    .into_iter()
                    .partition(|p| p.elevator_index() == Some(car_id) && p.destination_floor() == floor);
            self.passengers = staying;

            for passenger in &exiting {
                let details = passenger.details();
                debug!(
                    "delivered: {} on {car_id} at floor {floor} after {:.3}s",
                    details.id,
                    elapsed_secs - details.creation_timestamp
                );
                observer.on_exited(&details, elapsed_secs);
            }
            self.delivered += exiting.len() as u64;

            let remaining = (car.capacity + exiting.len()).saturating_sub(onboard);
            let mut entered = 0;
            for passenger in self.passengers.iter_mut() {
                if entered == remaining {
                    break;
                }
                if !passenger.is_waiting()
                    || passenger.starting_floor() != floor
                    || !car.state.serves(passenger.direction())
                {
                    continue;
                }
                passenger.enter_elevator(car_id)?;
                elevators.request_floor_from_car(car_id, passenger.destination_floor())?;
                observer.on_boarded(&passenger.details(), car_id, elapsed_secs);
                entered += 1;
            }
            if entered > 0 {
                debug!("entering: {entered} passengers into {car_id} at floor {floor}");
            }
        }
        Ok(())
    }

    /// `call_for_car` is idempotent, so a call that is still standing is
    /// left as it is.
    fn recall_waiting<D: Dispatcher>(&self, elevators: &mut ElevatorSystem<D>) -> LiftResult<()> {
        for passenger in self.passengers.iter().filter(|p| p.is_waiting()) {
            elevators.call_for_car(passenger.starting_floor(), passenger.direction())?;
        }
        Ok(())
    }

    fn create_passengers<D, O>(
        &mut self,
        elevators:    &mut ElevatorSystem<D>,
        observer:     &mut O,
        elapsed_secs: f64,
    ) -> LiftResult<()>
    where
        D: Dispatcher,
        O: PassengerObserver,
    {
        self.last_elapsed = elapsed_secs;
        let expected = self.expected_arrivals_at(elapsed_secs);
        let to_create = expected.saturating_sub(self.expected_arrivals);
        self.expected_arrivals = expected;

        let floors = elevators.number_of_floors();
        for _ in 0..to_create {
            if !self.has_room() {
                self.drop_arrival();
                continue;
            }
            let start = self.rng.floor(floors);
            let destination = self.rng.floor_except(floors, start);
            self.admit(elevators, observer, start, destination, elapsed_secs)?;
        }
        Ok(())
    }

    /// Add a waiting passenger and place its hall call.
    fn admit<D, O>(
        &mut self,
        elevators:    &mut ElevatorSystem<D>,
        observer:     &mut O,
        start:        usize,
        destination:  usize,
        elapsed_secs: f64,
    ) -> LiftResult<PassengerId>
    where
        D: Dispatcher,
        O: PassengerObserver,
    {
        let id = self.next_id;
        let passenger = Passenger::new(id, elapsed_secs, start, destination)?;
        elevators.call_for_car(start, passenger.direction())?;

        self.next_id = id.next();
        self.created += 1;
        observer.on_created(&passenger.details());
        self.passengers.push(passenger);
        Ok(id)
    }

    fn has_room(&mut self) -> bool {
        let room = self.passengers.len() < self.max_passengers;
        if room && self.at_capacity {
            info!("population back below cap of {}", self.max_passengers);
            self.at_capacity = false;
        }
        room
    }

    fn drop_arrival(&mut self) {
        self.dropped += 1;
        if !self.at_capacity {
            warn!(
                "population cap of {} reached; new arrivals are dropped until passengers are delivered",
                self.max_passengers
            );
            self.at_capacity = true;
        }
    }

    fn expected_arrivals_at(&self, elapsed_secs: f64) -> u64 {
        if self.passengers_per_minute <= 0.0 {
            return 0;
        }
        let interval = 60.0 / self.passengers_per_minute;
        (elapsed_secs / interval).floor() as u64
    }
}
