//! Country weight model: the global distribution of registration countries
//! in baseline traffic.
//!
//! Near-corridor countries get fixed shares; every other group draws a
//! per-country weight from a bounded uniform range.  The resulting vector is
//! renormalised to sum to 1.

use bx_core::country::{BALKAN, FAR, MID, NEAR, NEAR_SHARES, OTHER_EUROPE};
use bx_core::{CoreResult, Discrete, SimRng};

/// Ordered country codes and their normalised probabilities.
#[derive(Clone, Debug, PartialEq)]
pub struct CountryWeights {
    pub countries: Vec<&'static str>,
    pub weights:   Vec<f64>,
}

impl CountryWeights {
    /// Draw a fresh weight table.  Consumes one uniform per non-near country,
    /// in group order (mid, far, balkan, other).
    pub fn build(rng: &mut SimRng) -> Self {
        let mut countries: Vec<&'static str> = Vec::with_capacity(44);
        let mut raw: Vec<f64> = Vec::with_capacity(44);

        for (cc, share) in NEAR.into_iter().zip(NEAR_SHARES) {
            countries.push(cc);
            raw.push(share);
        }
        for cc in MID {
            countries.push(cc);
            raw.push(rng.gen_range(0.005..0.02));
        }
        for cc in FAR {
            let w = match cc {
                "GR" => rng.gen_range(0.005..0.02),
                "SE" => rng.gen_range(0.01..0.02),
                _ => rng.gen_range(0.003..0.015),
            };
            countries.push(cc);
            raw.push(w);
        }
        for cc in BALKAN {
            let w = match cc {
                "AL" => rng.gen_range(0.01..0.03),
                _ => rng.gen_range(0.005..0.02),
            };
            countries.push(cc);
            raw.push(w);
        }
        for cc in OTHER_EUROPE {
            countries.push(cc);
            raw.push(rng.gen_range(0.002..0.012));
        }

        let total: f64 = raw.iter().sum();
        let weights = raw.into_iter().map(|w| w / total).collect();
        Self { countries, weights }
    }

    /// Inverse-CDF table for per-row sampling.
    pub fn distribution(&self) -> CoreResult<Discrete<&'static str>> {
        Discrete::new(self.countries.iter().copied().zip(self.weights.iter().copied()))
    }

    pub fn weight_of(&self, country: &str) -> Option<f64> {
        self.countries
            .iter()
            .position(|&c| c == country)
            .map(|i| self.weights[i])
    }

    pub fn len(&self) -> usize {
        self.countries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }
}
