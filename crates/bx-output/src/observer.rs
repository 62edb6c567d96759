//! `SinkObserver` bridges `SimObserver` to row and object sinks.

use std::time::{Duration, Instant};

use tracing::{info, warn};

use bx_core::Direction;
use bx_sim::{DayBatch, SimObserver};

use crate::writer::{ObjectSink, RowSink};
use crate::{OutputError, OutputResult};

/// Accumulated write statistics.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SinkTimings {
    pub days:        u64,
    pub incoming:    u64,
    pub outgoing:    u64,
    pub parts:       u64,
    pub row_sinks:   Duration,
    pub object_sink: Duration,
}

impl SinkTimings {
    pub fn rows(&self) -> u64 {
        self.incoming + self.outgoing
    }
}

/// A [`SimObserver`] that writes every day's streams to all configured
/// sinks in `chunk_rows` slices.
///
/// Row sinks are mirrored: each chunk is inserted into every sink in the
/// order they were added, incoming before outgoing.  The object sink gets
/// one part per chunk offset and direction; the incoming and outgoing parts
/// at the same offset share a part index.
///
/// Errors from the sinks are stored internally because `SimObserver` methods
/// have no return value.  After `sim.run()` returns, check for errors with
/// [`take_error`][Self::take_error].  Once an error is stored no further
/// rows are written.
pub struct SinkObserver {
    row_sinks:   Vec<Box<dyn RowSink>>,
    object_sink: Option<Box<dyn ObjectSink>>,
    chunk_rows:  usize,
    timings:     SinkTimings,
    last_error:  Option<OutputError>,
}

impl SinkObserver {
    pub fn new(chunk_rows: usize) -> Self {
        Self {
            row_sinks:   Vec::new(),
            object_sink: None,
            chunk_rows:  chunk_rows.max(1),
            timings:     SinkTimings::default(),
            last_error:  None,
        }
    }

    pub fn with_row_sink(mut self, sink: Box<dyn RowSink>) -> Self {
        self.row_sinks.push(sink);
        self
    }

    pub fn with_object_sink(mut self, sink: Box<dyn ObjectSink>) -> Self {
        self.object_sink = Some(sink);
        self
    }

    pub fn row_sink_count(&self) -> usize {
        self.row_sinks.len()
    }

    pub fn timings(&self) -> SinkTimings {
        self.timings
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                warn!(error = %e, "sink write failed; further writes skipped");
                self.last_error = Some(e);
            }
        }
    }

    fn write_rows(&mut self, batch: &DayBatch) -> OutputResult<()> {
        for direction in Direction::BOTH {
            for chunk in batch.stream(direction).chunks(self.chunk_rows) {
                for sink in &mut self.row_sinks {
                    sink.insert_batch(direction, batch.day, chunk)?;
                }
            }
        }
        Ok(())
    }

    fn write_parts(&mut self, batch: &DayBatch) -> OutputResult<u64> {
        let Some(sink) = self.object_sink.as_mut() else {
            return Ok(0);
        };
        let longest = batch.incoming.len().max(batch.outgoing.len());
        let mut written = 0;
        for (part, off) in (0..longest).step_by(self.chunk_rows).enumerate() {
            for direction in Direction::BOTH {
                let rows = batch.stream(direction);
                if off < rows.len() {
                    let end = (off + self.chunk_rows).min(rows.len());
                    sink.put_part(direction, batch.day, part as u32, &rows[off..end])?;
                    written += 1;
                }
            }
        }
        Ok(written)
    }
}

impl SimObserver for SinkObserver {
    fn on_day(&mut self, batch: &DayBatch) {
        if self.last_error.is_some() {
            return;
        }

        let t_rows = Instant::now();
        let result = self.write_rows(batch);
        let row_elapsed = t_rows.elapsed();
        self.store_err(result);
        if self.last_error.is_some() {
            return;
        }

        let t_parts = Instant::now();
        let parts = match self.write_parts(batch) {
            Ok(n) => n,
            Err(e) => {
                self.store_err(Err(e));
                0
            }
        };
        let object_elapsed = t_parts.elapsed();

        let t = &mut self.timings;
        t.days += 1;
        t.incoming += batch.incoming.len() as u64;
        t.outgoing += batch.outgoing.len() as u64;
        t.parts += parts;
        t.row_sinks += row_elapsed;
        t.object_sink += object_elapsed;

        info!(
            day = %batch.day,
            incoming = batch.incoming.len(),
            outgoing = batch.outgoing.len(),
            rows_secs = format_args!("{:.2}", row_elapsed.as_secs_f64()),
            parts_secs = format_args!("{:.2}", object_elapsed.as_secs_f64()),
            "day written"
        );
    }

    fn on_run_end(&mut self, days: u64) {
        let mut results = Vec::with_capacity(self.row_sinks.len() + 1);
        for sink in &mut self.row_sinks {
            results.push(sink.finish());
        }
        if let Some(sink) = self.object_sink.as_mut() {
            results.push(sink.finish());
        }
        for result in results {
            self.store_err(result);
        }

        let t = self.timings;
        info!(
            days,
            rows = t.rows(),
            parts = t.parts,
            rows_secs = format_args!("{:.2}", t.row_sinks.as_secs_f64()),
            parts_secs = format_args!("{:.2}", t.object_sink.as_secs_f64()),
            "run complete"
        );
    }
}
