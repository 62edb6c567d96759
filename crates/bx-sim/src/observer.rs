//! Simulation observer trait for progress reporting and data handoff.

use chrono::NaiveDate;

use crate::DayBatch;

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// day loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example: progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter;
///
/// impl SimObserver for ProgressPrinter {
///     fn on_day(&mut self, batch: &DayBatch) {
///         println!("{}: {} rows", batch.day, batch.total_rows());
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each day, before any draws.
    fn on_day_start(&mut self, _day: NaiveDate) {}

    /// Called once per day with the final, boundary-encoded streams.
    fn on_day(&mut self, _batch: &DayBatch) {}

    /// Called once after the final day completes.
    fn on_run_end(&mut self, _days: u64) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
