//! Random sources backing the trajectory sampler.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, StandardNormal};

use super::traits::NormalSource;

/// Seed used when none is given.
pub const DEFAULT_SEED: u64 = 42;

/// Seeded ChaCha8 stream of standard-normal variates.
#[derive(Clone, Debug)]
pub struct SeededNormal {
    rng: ChaCha8Rng,
    seed: u64,
}

impl SeededNormal {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Seed the stream was (re)started from.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Restart the stream from `seed`.
    pub fn reseed(&mut self, seed: u64) {
        *self = Self::new(seed);
    }
}

impl Default for SeededNormal {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}

impl NormalSource for SeededNormal {
    #[inline]
    fn next_standard_normal(&mut self) -> f64 {
        StandardNormal.sample(&mut self.rng)
    }
}

/// Replays a fixed sequence of variates, wrapping around at the end.
///
/// An empty sequence behaves like an all-zero one.
#[derive(Clone, Debug, Default)]
pub struct ReplayNormals {
    values: Vec<f64>,
    cursor: usize,
}

impl ReplayNormals {
    pub fn new(values: Vec<f64>) -> Self {
        Self { values, cursor: 0 }
    }

    /// A source that never perturbs anything.
    pub fn zeros() -> Self {
        Self::default()
    }

    /// Number of variates handed out so far.
    pub fn drawn(&self) -> usize {
        self.cursor
    }
}

impl NormalSource for ReplayNormals {
    fn next_standard_normal(&mut self) -> f64 {
        if self.values.is_empty() {
            self.cursor += 1;
            return 0.0;
        }
        let z = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        z
    }
}
