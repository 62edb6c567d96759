//! Intra-day arrival times for baseline traffic.

use bx_core::SimRng;
use bx_core::time::LAST_SECOND;

/// `n` non-decreasing second offsets in `[0, 86399]`.
///
/// The offsets are the partial sums of `n` Exponential(1) gaps, rescaled so
/// the last partial sum lands on the final second of the day.  Consumes
/// exactly `n` draws.
pub fn sequential_seconds(rng: &mut SimRng, n: usize) -> Vec<u32> {
    if n == 0 {
        return Vec::new();
    }

    let mut acc = 0.0;
    let cumulative: Vec<f64> = (0..n)
        .map(|_| {
            acc += rng.exp1();
            acc
        })
        .collect();

    if acc <= 0.0 {
        return vec![0; n];
    }

    let span = f64::from(LAST_SECOND);
    cumulative
        .into_iter()
        .map(|c| ((c / acc) * span) as u32)
        .collect()
}
