//! `bx-output` — sinks for generated border-crossing events.
//!
//! Two kinds of destination are supported:
//!
//! | Kind        | Trait          | Backends                                          |
//! |-------------|----------------|---------------------------------------------------|
//! | Row sink    | [`RowSink`]    | CSV (always), SQLite (feature `sqlite`)           |
//! | Object sink | [`ObjectSink`] | Parquet parts in an [`ObjectStore`] (feature `parquet`) |
//!
//! | Feature   | Backend | Files created                                                  |
//! |-----------|---------|----------------------------------------------------------------|
//! | *(none)*  | CSV     | `vehicles_incoming.csv`, `vehicles_outgoing.csv`               |
//! | `sqlite`  | SQLite  | tables `vehicles_incoming`, `vehicles_outgoing` in one file    |
//! | `parquet` | Parquet | `<prefix>/direction=<dir>/date=<YYYY-MM-DD>/part-<NNNNN>.parquet` |
//!
//! All sinks are driven by [`SinkObserver`], which implements
//! `bx_sim::SimObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use bx_output::{CsvSink, SinkObserver};
//!
//! let mut obs = SinkObserver::new(config.chunk_rows)
//!     .with_row_sink(Box::new(CsvSink::new(Path::new("./output"))?));
//! sim.run(&mut obs)?;
//! if let Some(e) = obs.take_error() { eprintln!("output error: {e}"); }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod store;
pub mod writer;

#[cfg(feature = "sqlite")]
pub mod sqlite;

#[cfg(feature = "parquet")]
pub mod parquet;


pub use csv::CsvSink;
pub use error::{OutputError, OutputResult};
pub use observer::{SinkObserver, SinkTimings};
pub use store::{LocalObjectStore, ObjectStore, partition_key};
pub use writer::{ObjectSink, RowSink, format_ts};

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteSink;

#[cfg(feature = "parquet")]
pub use parquet::{Compression, ParquetObjectSink};
