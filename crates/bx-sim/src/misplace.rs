//! Ingestion-order disorder: bounded positional swaps inside a sorted stream.

use bx_core::SimRng;

/// Swap up to `per_day` rows with a neighbour at most `max_offset` positions
/// away.
///
/// Positions are chosen without replacement, then one offset per position is
/// drawn from `[-max_offset, max_offset]`; the target is clamped into the
/// stream.  Swaps are applied in draw order, so overlapping pairs compose.
/// The multiset of rows and the length never change.  Offsets beyond
/// `i64::MAX` are drawn from the saturated range.
///
/// No draws are made when `per_day == 0`, `max_offset == 0`, or the stream is
/// empty.
pub fn apply_misplacements<T>(rng: &mut SimRng, rows: &mut [T], per_day: usize, max_offset: usize) {
    if per_day == 0 || max_offset == 0 || rows.is_empty() {
        return;
    }

    let len = rows.len();
    let positions = rng.distinct_indices(len, per_day);
    let max = i64::try_from(max_offset).unwrap_or(i64::MAX);
    let offsets: Vec<i64> = positions.iter().map(|_| rng.gen_range(-max..=max)).collect();

    let last = (len - 1) as i64;
    for (i, offset) in positions.into_iter().zip(offsets) {
        let j = (i as i64).saturating_add(offset).clamp(0, last) as usize;
        if i != j {
            rows.swap(i, j);
        }
    }
}
