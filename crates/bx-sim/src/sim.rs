//! The `Sim` struct and its day loop.

use chrono::NaiveDate;
use tracing::debug;

use bx_core::time::nth_day;
use bx_core::{SimConfig, SimRng};

use crate::codec::encode_stream;
use crate::{CountryWeights, DailyComposer, DayBatch, DaySchedule, SimError, SimObserver, SimResult};

/// The main simulation runner.
///
/// `Sim` owns the run's only [`SimRng`] and drives one iteration per
/// simulated day:
///
/// 1. **Schedule**: draw the day's incoming/outgoing volume targets.
/// 2. **Compose**: baseline + standout cohorts, sorted, then misplaced.
/// 3. **Encode**: single-letter country codes on both streams.
/// 4. **Handoff**: [`SimObserver::on_day`] with the finished batch.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim {
    /// Run configuration (volumes, probabilities, run length, seed, …).
    pub config: SimConfig,

    /// The shared generator.  Every draw of the run goes through it.
    pub(crate) rng: SimRng,

    /// Country distribution drawn at build time.
    pub weights: CountryWeights,

    /// Baseline tables and standout pools.
    pub composer: DailyComposer,

    /// Index of the next day to simulate (0 = `config.start_date`).
    pub current_day: u64,
}

impl Sim {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run from the current day to `config.total_days()`.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        let end = self.config.total_days();
        while self.current_day < end {
            self.step(observer)?;
        }
        observer.on_run_end(self.current_day);
        Ok(())
    }

    /// Run exactly `n` days from the current position (ignores the configured
    /// run length).
    pub fn run_days<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            self.step(observer)?;
        }
        Ok(())
    }

    /// Produce the next day's batch without an observer.
    pub fn next_day(&mut self) -> SimResult<DayBatch> {
        let day = self.date_of(self.current_day)?;
        let batch = self.generate(day);
        self.current_day += 1;
        Ok(batch)
    }

    /// Calendar date of day index `n`.
    pub fn date_of(&self, n: u64) -> SimResult<NaiveDate> {
        nth_day(self.config.start_date, n).ok_or(SimError::DateOverflow {
            start:  self.config.start_date,
            offset: n,
        })
    }

    // ── Core day processing ───────────────────────────────────────────────

    fn step<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        let day = self.date_of(self.current_day)?;
        observer.on_day_start(day);
        let batch = self.generate(day);
        observer.on_day(&batch);
        self.current_day += 1;
        Ok(())
    }

    fn generate(&mut self, day: NaiveDate) -> DayBatch {
        let schedule = DaySchedule::draw(&mut self.rng, day, &self.config);
        debug!(
            %day,
            incoming_target = schedule.incoming_target,
            outgoing_target = schedule.outgoing_target,
            "day schedule"
        );

        let mut batch = self.composer.compose(&mut self.rng, &schedule);
        encode_stream(&mut batch.incoming);
        encode_stream(&mut batch.outgoing);
        batch
    }
}
