//! The sink traits implemented by all backends.

use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};

use bx_core::{CrossingEvent, Direction};

use crate::OutputResult;

/// A destination that receives rows in insertion order (CSV files, SQLite
/// tables).  One logical table per [`Direction`].
///
/// Errors are returned to the caller; [`SinkObserver`][crate::SinkObserver]
/// stores the first one for retrieval after the run.
pub trait RowSink {
    /// Append `rows` to the table for `direction`.
    fn insert_batch(&mut self, direction: Direction, day: NaiveDate, rows: &[CrossingEvent]) -> OutputResult<()>;

    /// Flush and close all underlying handles.
    ///
    /// Idempotent.
    fn finish(&mut self) -> OutputResult<()>;
}

/// A destination that receives whole part files, addressed by direction,
/// day and part index.
pub trait ObjectSink {
    fn put_part(&mut self, direction: Direction, day: NaiveDate, part: u32, rows: &[CrossingEvent]) -> OutputResult<()>;

    fn finish(&mut self) -> OutputResult<()>;
}

/// `2025-01-06T05:12:09Z`.
pub fn format_ts(ts: DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Secs, true)
}
