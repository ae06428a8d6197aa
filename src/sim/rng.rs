//! Random source used by the enemy AI
//!
//! Sessions default to a seeded PCG stream so a run replays identically
//! from the same seed and inputs. Tests swap in scripted sources.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Uniform integer draws over an inclusive range
pub trait RandomSource {
    fn range_i32(&mut self, lo: i32, hi: i32) -> i32;
}

impl RandomSource for Pcg32 {
    fn range_i32(&mut self, lo: i32, hi: i32) -> i32 {
        self.random_range(lo..=hi)
    }
}

/// Deterministic PCG stream for a seed
pub fn seeded(seed: u64) -> Pcg32 {
    Pcg32::seed_from_u64(seed)
}
