//! Per-day volume targets.

use chrono::{DateTime, NaiveDate, Utc};

use bx_core::{SimConfig, SimRng};
use bx_core::time::day_start;

/// What one simulated day has to produce.  Derived, consumed, not stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DaySchedule {
    pub day:             NaiveDate,
    pub day_start:       DateTime<Utc>,
    pub incoming_target: usize,
    pub outgoing_target: usize,
}

impl DaySchedule {
    /// Fixed targets, no draws.
    pub fn fixed(day: NaiveDate, incoming_target: usize, outgoing_target: usize) -> Self {
        Self { day, day_start: day_start(day), incoming_target, outgoing_target }
    }

    /// Jittered targets: `floor(avg * (1 + U(-j, j)))`, incoming first.
    /// With zero jitter no draws are made.
    pub fn draw(rng: &mut SimRng, day: NaiveDate, config: &SimConfig) -> Self {
        let incoming_target = jittered(rng, config.avg_in_per_day, config.day_jitter);
        let outgoing_target = jittered(rng, config.avg_out_per_day, config.day_jitter);
        Self::fixed(day, incoming_target, outgoing_target)
    }
}

fn jittered(rng: &mut SimRng, avg: u64, jitter: f64) -> usize {
    if jitter <= 0.0 {
        return avg as usize;
    }
    let factor = 1.0 + rng.gen_range(-jitter..jitter);
    (avg as f64 * factor).max(0.0) as usize
}
