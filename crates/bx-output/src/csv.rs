//! CSV row sink.
//!
//! Creates two files in the configured output directory:
//! - `vehicles_incoming.csv`
//! - `vehicles_outgoing.csv`

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use csv::Writer;

use bx_core::{CrossingEvent, Direction, EVENT_COLUMNS};

use crate::OutputResult;
use crate::writer::{RowSink, format_ts};

/// Writes both event streams to CSV files, one per direction.
pub struct CsvSink {
    incoming: Writer<File>,
    outgoing: Writer<File>,
    finished: bool,
}

impl CsvSink {
    /// Create `dir` if needed, (re)create both files and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        fs::create_dir_all(dir)?;
        Ok(Self {
            incoming: open(dir, Direction::Incoming)?,
            outgoing: open(dir, Direction::Outgoing)?,
            finished: false,
        })
    }

    /// Path of the file holding `direction`.
    pub fn path_of(dir: &Path, direction: Direction) -> PathBuf {
        dir.join(format!("{}.csv", direction.table_name()))
    }

    fn writer(&mut self, direction: Direction) -> &mut Writer<File> {
        match direction {
            Direction::Incoming => &mut self.incoming,
            Direction::Outgoing => &mut self.outgoing,
        }
    }
}

fn open(dir: &Path, direction: Direction) -> OutputResult<Writer<File>> {
    let mut w = Writer::from_path(CsvSink::path_of(dir, direction))?;
    w.write_record(EVENT_COLUMNS)?;
    Ok(w)
}

impl RowSink for CsvSink {
    fn insert_batch(&mut self, direction: Direction, _day: NaiveDate, rows: &[CrossingEvent]) -> OutputResult<()> {
        let w = self.writer(direction);
        for e in rows {
            let id = &e.identity;
            w.write_record([
                format_ts(e.ts).as_str(),
                id.country,
                id.plate.as_str(),
                id.vehicle_type.as_str(),
                id.colour.as_str(),
                id.brand,
                e.location,
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.incoming.flush()?;
        self.outgoing.flush()?;
        Ok(())
    }
}
