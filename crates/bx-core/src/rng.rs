//! The run-wide deterministic RNG handle.
//!
//! # Determinism strategy
//!
//! A generator run owns exactly one `SimRng`, seeded once from the configured
//! seed.  Every sampling function in the workspace takes `&mut SimRng` and
//! draws from it in a fixed order, so the dataset is a pure function of
//! `(seed, configuration, draw order)`:
//!
//! ```text
//! country weights → commuter pool → chilled pool → smuggler pool
//! per day: targets → baseline IN → baseline OUT → commuters (weekdays)
//!          → chilled → smugglers → misplacement IN → misplacement OUT
//! ```
//!
//! `SimRng` is neither `Clone` nor `Copy`; a second handle would fork the
//! stream.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use rand_distr::Exp1;

/// Simulation-level RNG threaded through every sampling call.
///
/// Used only in single-threaded contexts.  The exact byte stream depends on
/// the `rand` version, so regression fixtures are tied to a build, not just a
/// seed.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Sample a uniformly distributed value of any `Standard`-distributed type.
    /// For `f64` this is uniform in `[0, 1)`.
    #[inline]
    pub fn random<T>(&mut self) -> T
    where
        rand::distributions::Standard: rand::distributions::Distribution<T>,
    {
        self.0.r#gen()
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// `true` with probability `p` (clamped to [0, 1]).
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }

    /// Uniform index in `0..len`.
    ///
    /// # Panics
    /// Panics if `len == 0`.  Callers pass the length of a non-empty table.
    #[inline]
    pub fn index(&mut self, len: usize) -> usize {
        self.0.gen_range(0..len)
    }

    /// Choose a uniformly random element of a non-empty `'static` table.
    #[inline]
    pub fn pick<T: Copy>(&mut self, items: &[T]) -> T {
        items[self.index(items.len())]
    }

    /// One draw from Exponential(rate = 1).
    #[inline]
    pub fn exp1(&mut self) -> f64 {
        self.0.sample(Exp1)
    }

    /// `amount` distinct indices from `0..len`, in sampling order.
    ///
    /// `amount` is clamped to `len`.
    pub fn distinct_indices(&mut self, len: usize, amount: usize) -> Vec<usize> {
        rand::seq::index::sample(&mut self.0, len, amount.min(len)).into_vec()
    }
}
