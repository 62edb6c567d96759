//! Enumerated discrete distributions sampled by inverse-CDF lookup.
//!
//! Every weighted choice in the generator (countries, vehicle types, cohort
//! nationalities) goes through [`Discrete`] so that one uniform `f64` draw
//! maps to exactly one outcome.  The mapping is:
//!
//! ```text
//! u ~ U[0, 1)
//! outcome = first i such that u < cumulative[i]
//! ```
//!
//! Zero-weight entries are allowed and are never selected.

use crate::{CoreError, CoreResult, SimRng};

/// A normalised discrete distribution over `T` with an explicit cumulative
/// weight array.
#[derive(Clone, Debug)]
pub struct Discrete<T> {
    items:      Vec<T>,
    cumulative: Vec<f64>,
}

impl<T> Discrete<T> {
    /// Build from `(item, weight)` pairs.  Weights need not sum to 1; they are
    /// normalised here.
    ///
    /// Fails if the table is empty, any weight is negative or non-finite, or
    /// the weights sum to zero.
    pub fn new(pairs: impl IntoIterator<Item = (T, f64)>) -> CoreResult<Self> {
        let (items, weights): (Vec<T>, Vec<f64>) = pairs.into_iter().unzip();
        if items.is_empty() {
            return Err(CoreError::Weights("empty table".into()));
        }
        if let Some(bad) = weights.iter().find(|w| !w.is_finite() || **w < 0.0) {
            return Err(CoreError::Weights(format!("invalid weight {bad}")));
        }
        let total: f64 = weights.iter().sum();
        if total <= 0.0 {
            return Err(CoreError::Weights("weights sum to zero".into()));
        }

        let mut acc = 0.0;
        let mut cumulative: Vec<f64> = weights
            .iter()
            .map(|w| {
                acc += w / total;
                acc
            })
            .collect();
        // Pin the tail so rounding can never leave a gap below 1.0.
        if let Some(last) = cumulative.last_mut() {
            *last = 1.0;
        }

        Ok(Self { items, cumulative })
    }

    /// Draw one outcome (consumes exactly one `f64` from `rng`).
    #[inline]
    pub fn sample(&self, rng: &mut SimRng) -> &T {
        let u: f64 = rng.random();
        let idx = self
            .cumulative
            .partition_point(|&c| c <= u)
            .min(self.items.len() - 1);
        &self.items[idx]
    }

    /// Normalised probability of the `i`-th outcome.
    pub fn probability(&self, i: usize) -> f64 {
        let prev = if i == 0 { 0.0 } else { self.cumulative[i - 1] };
        self.cumulative[i] - prev
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T: Copy> Discrete<T> {
    /// Like [`sample`](Self::sample) but returns the outcome by value.
    #[inline]
    pub fn draw(&self, rng: &mut SimRng) -> T {
        *self.sample(rng)
    }
}
