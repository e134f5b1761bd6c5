//! `StopQueue` — a car's committed stops in one direction.

use std::collections::BTreeMap;

use lift_core::Direction;

/// Ordered multiset of floors a car has promised to visit.
///
/// The `direction` fixes which end is the front: an up-queue yields its
/// lowest floor first, a down-queue its highest.  Duplicate requests are
/// counted, not rejected, and collapse into a single stop when the front is
/// popped.
#[derive(Debug, Clone)]
pub struct StopQueue {
    direction: Direction,
    /// floor → number of outstanding requests for it.
    stops:     BTreeMap<usize, usize>,
}

impl StopQueue {
    pub fn new(direction: Direction) -> Self {
        Self { direction, stops: BTreeMap::new() }
    }

    pub fn push(&mut self, floor: usize) {
        *self.stops.entry(floor).or_default() += 1;
    }

    /// The next stop in travel order, if any.
    pub fn front(&self) -> Option<usize> {
        let next = match self.direction {
            Direction::Up   => self.stops.keys().next(),
            Direction::Down => self.stops.keys().next_back(),
        };
        next.copied()
    }

    /// If `floor` is the front, remove every request for it and return how
    /// many were removed.  Otherwise leave the queue untouched and return 0.
    pub fn pop_front_if(&mut self, floor: usize) -> usize {
        if self.front() != Some(floor) {
            return 0;
        }
        self.stops.remove(&floor).unwrap_or(0)
    }

    /// Total outstanding requests, duplicates included.
    pub fn len(&self) -> usize {
        self.stops.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// Distinct floors in travel order.
    pub fn floors(&self) -> Vec<usize> {
        match self.direction {
            Direction::Up   => self.stops.keys().copied().collect(),
            Direction::Down => self.stops.keys().rev().copied().collect(),
        }
    }
}
