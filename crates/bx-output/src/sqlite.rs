//! SQLite row sink (feature `sqlite`).
//!
//! One database file holds both tables, `vehicles_incoming` and
//! `vehicles_outgoing`, with the event columns in canonical order.  Several
//! sinks pointing at different files mirror the same rows.

use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use rusqlite::Connection;

use bx_core::{CrossingEvent, Direction};

use crate::OutputResult;
use crate::writer::{RowSink, format_ts};

/// Writes both event streams to an SQLite database.
pub struct SqliteSink {
    conn:     Connection,
    finished: bool,
}

impl SqliteSink {
    /// Open (or create) the database at `path` and initialise the schema.
    pub fn open(path: &Path) -> OutputResult<Self> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let conn = Connection::open(path)?;
        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous  = NORMAL;",
        )?;
        for direction in Direction::BOTH {
            conn.execute_batch(&format!(
                "CREATE TABLE IF NOT EXISTS {} (
                     ts                      TEXT NOT NULL,
                     country_of_registration TEXT NOT NULL,
                     license_plate           TEXT NOT NULL,
                     vehicle_type            TEXT NOT NULL,
                     colour                  TEXT NOT NULL,
                     brand                   TEXT NOT NULL,
                     location_of_crossing    TEXT NOT NULL
                 );",
                direction.table_name()
            ))?;
        }
        Ok(Self { conn, finished: false })
    }
}

impl RowSink for SqliteSink {
    fn insert_batch(&mut self, direction: Direction, _day: NaiveDate, rows: &[CrossingEvent]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.transaction()?;
        {
            let mut stmt = tx.prepare_cached(&format!(
                "INSERT INTO {} \
                 (ts, country_of_registration, license_plate, vehicle_type, colour, brand, location_of_crossing) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
                direction.table_name()
            ))?;
            for e in rows {
                let id = &e.identity;
                stmt.execute(rusqlite::params![
                    format_ts(e.ts),
                    id.country,
                    id.plate,
                    id.vehicle_type.as_str(),
                    id.colour.as_str(),
                    id.brand,
                    e.location,
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.conn.execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")?;
        Ok(())
    }
}
