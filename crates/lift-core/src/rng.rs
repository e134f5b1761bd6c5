//! Deterministic simulation RNG.
//!
//! # Determinism strategy
//!
//! The run owns one root `SimRng` seeded from `SimConfig::seed`.  Each
//! consumer (initial car placement, passenger generation) takes its own
//! child stream:
//!
//!   child_seed = root.next_u64() XOR (offset * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio.
//! Children are derived in a fixed order at build time, so drawing more or
//! fewer numbers from one stream never shifts another.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Seedable RNG used for every random draw in the simulator.
///
/// Single-threaded by construction; the simulation never shares one.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Derive a child `SimRng` with a different seed offset.
    pub fn child(&mut self, offset: u64) -> SimRng {
        let child_seed: u64 = self.0.r#gen::<u64>() ^ offset.wrapping_mul(MIXING_CONSTANT);
        SimRng(SmallRng::seed_from_u64(child_seed))
    }

    /// A uniformly random floor in `0..floors`.
    ///
    /// # Panics
    /// Panics if `floors == 0`.
    #[inline]
    pub fn floor(&mut self, floors: usize) -> usize {
        self.0.gen_range(0..floors)
    }

    /// A uniformly random floor in `0..floors` other than `excluded`.
    ///
    /// Draws from the `floors - 1` remaining floors and shifts the draw past
    /// `excluded`, so no rejection loop is needed.
    ///
    /// # Panics
    /// Panics if `floors < 2`.
    #[inline]
    pub fn floor_except(&mut self, floors: usize, excluded: usize) -> usize {
        let draw = self.0.gen_range(0..floors - 1);
        if draw >= excluded { draw + 1 } else { draw }
    }
}
