//! `CallBoard` — the hall call flags of the whole building.

use lift_core::Direction;

/// One up flag and one down flag per floor.
///
/// A set flag means somebody is waiting at that floor to travel in that
/// direction.  The two directions are independent: clearing one never
/// touches the other.
#[derive(Debug, Clone)]
pub struct CallBoard {
    up:   Vec<bool>,
    down: Vec<bool>,
}

impl CallBoard {
    pub fn new(number_of_floors: usize) -> Self {
        Self {
            up:   vec![false; number_of_floors],
            down: vec![false; number_of_floors],
        }
    }

    pub fn set(&mut self, floor: usize, direction: Direction) {
        self.flags_mut(direction)[floor] = true;
    }

    pub fn clear(&mut self, floor: usize, direction: Direction) {
        self.flags_mut(direction)[floor] = false;
    }

    pub fn is_set(&self, floor: usize, direction: Direction) -> bool {
        self.flags(direction).get(floor).copied().unwrap_or(false)
    }

    /// Lowest floor `>= from` with a pending up call.
    pub fn nearest_up_from(&self, from: usize) -> Option<usize> {
        self.up
            .iter()
            .enumerate()
            .skip(from)
            .find_map(|(floor, &called)| called.then_some(floor))
    }

    /// Highest floor `<= from` with a pending down call.
    pub fn nearest_down_from(&self, from: usize) -> Option<usize> {
        let end = (from + 1).min(self.down.len());
        self.down[..end].iter().rposition(|&called| called)
    }

    fn flags(&self, direction: Direction) -> &[bool] {
        match direction {
            Direction::Up   => &self.up,
            Direction::Down => &self.down,
        }
    }

    fn flags_mut(&mut self, direction: Direction) -> &mut [bool] {
        match direction {
            Direction::Up   => &mut self.up,
            Direction::Down => &mut self.down,
        }
    }
}
