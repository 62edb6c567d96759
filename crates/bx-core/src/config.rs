//! Generator configuration.
//!
//! Loaded from a TOML file and/or CLI flags by the application crate and
//! passed to the simulation builder.  Every field has a default, so a config
//! file only needs the keys it overrides.

use chrono::NaiveDate;

use crate::{CoreError, CoreResult};

/// Top-level generator configuration.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct SimConfig {
    /// Run length in years of 365 days.  Ignored when `days` is set.
    pub years: u32,

    /// Explicit run length in days.  Must be > 0 when set.
    pub days: Option<u64>,

    /// First simulated day (UTC).
    pub start_date: NaiveDate,

    /// Mean baseline incoming events per day.
    pub avg_in_per_day: u64,

    /// Mean baseline outgoing events per day.
    pub avg_out_per_day: u64,

    /// Daily volume jitter: each day's target is `avg * (1 ± U(0, jitter))`.
    pub day_jitter: f64,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,

    /// Rows per sink write (and per object-store part file).
    pub chunk_rows: usize,

    /// Per-event probability that a scheduled standout crossing is not
    /// recorded.
    pub missing_prob: f64,

    /// Standout pool sizes.
    pub commuters: usize,
    pub chilled:   usize,
    pub smugglers: usize,

    /// Rows displaced per day and stream by the misplacement injector.
    pub misplace_per_day: usize,

    /// Largest positional displacement of a misplaced row.
    pub misplace_max_offset: usize,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            years:               1,
            days:                None,
            start_date:          NaiveDate::from_ymd_opt(2025, 1, 1).unwrap_or_default(),
            avg_in_per_day:      1_100_000,
            avg_out_per_day:     1_100_000,
            day_jitter:          0.12,
            seed:                42,
            chunk_rows:          250_000,
            missing_prob:        0.015,
            commuters:           25_000,
            chilled:             2_500,
            smugglers:           350,
            misplace_per_day:    50,
            misplace_max_offset: 250,
        }
    }
}

impl SimConfig {
    /// Number of days to simulate.  Years are counted as 365 days.
    pub fn total_days(&self) -> u64 {
        self.days.unwrap_or(u64::from(self.years) * 365)
    }

    /// Reject parameter combinations the generator cannot honour.
    pub fn validate(&self) -> CoreResult<()> {
        if self.days == Some(0) {
            return Err(CoreError::Config("days must be > 0".into()));
        }
        if self.total_days() == 0 {
            return Err(CoreError::Config("run length is zero days".into()));
        }
        if !(0.0..=1.0).contains(&self.missing_prob) {
            return Err(CoreError::Config(format!(
                "missing_prob must be in [0, 1], got {}",
                self.missing_prob
            )));
        }
        if !(0.0..1.0).contains(&self.day_jitter) {
            return Err(CoreError::Config(format!(
                "day_jitter must be in [0, 1), got {}",
                self.day_jitter
            )));
        }
        if self.chunk_rows == 0 {
            return Err(CoreError::Config("chunk_rows must be > 0".into()));
        }
        if i64::try_from(self.misplace_max_offset).is_err() {
            return Err(CoreError::Config(format!(
                "misplace_max_offset must be <= {}, got {}",
                i64::MAX,
                self.misplace_max_offset
            )));
        }
        Ok(())
    }
}
