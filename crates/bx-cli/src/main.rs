//! `crossgen` — generate a synthetic dataset of vehicle border crossings.
//!
//! Rows go to SQLite databases (`--sqlite`, mirrored) or, without any SQLite
//! target, to CSV files; every day is additionally written as Parquet parts
//! into a local lake directory.

mod args;


use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use bx_core::SimConfig;
use bx_output::{CsvSink, LocalObjectStore, ParquetObjectSink, SinkObserver, SinkTimings, SqliteSink};
use bx_sim::SimBuilder;

use crate::args::Args;

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();

    let args = Args::parse();
    let config = args.resolve()?;
    info!(
        days = config.total_days(),
        start = %config.start_date,
        seed = config.seed,
        avg_in = config.avg_in_per_day,
        avg_out = config.avg_out_per_day,
        commuters = config.commuters,
        chilled = config.chilled,
        smugglers = config.smugglers,
        "config_loaded"
    );

    let mut observer = build_observer(&args, &config)?;
    let mut sim = SimBuilder::new(config).build().context("building simulation")?;

    let started = Instant::now();
    sim.run(&mut observer).context("running simulation")?;
    if let Some(e) = observer.take_error() {
        return Err(e).context("writing output");
    }

    print_summary(started.elapsed().as_secs_f64(), &observer.timings());
    Ok(())
}

/// Row sinks (SQLite targets, else CSV) plus the Parquet lake.
pub(crate) fn build_observer(args: &Args, config: &SimConfig) -> Result<SinkObserver> {
    let mut observer = SinkObserver::new(config.chunk_rows);

    let targets = args.sqlite_targets();
    if targets.is_empty() {
        let sink = CsvSink::new(&args.csv_dir)
            .with_context(|| format!("creating CSV output in {}", args.csv_dir.display()))?;
        info!(dir = %args.csv_dir.display(), "csv sink");
        observer = observer.with_row_sink(Box::new(sink));
    }
    for path in &targets {
        let sink = SqliteSink::open(path).with_context(|| format!("opening SQLite database {}", path.display()))?;
        info!(path = %path.display(), "sqlite sink");
        observer = observer.with_row_sink(Box::new(sink));
    }

    let store = LocalObjectStore::new(&args.lake_dir);
    let lake = ParquetObjectSink::new(store, args.lake_prefix(), args.compression.into());
    info!(
        dir = %args.lake_dir.display(),
        prefix = args.lake_prefix(),
        compression = ?args.compression,
        "parquet lake"
    );
    Ok(observer.with_object_sink(Box::new(lake)))
}

fn print_summary(wall_secs: f64, t: &SinkTimings) {
    println!();
    println!("--- ingest timings (informational only) ---");
    println!("Days written:        {}", t.days);
    println!("Rows incoming:       {}", t.incoming);
    println!("Rows outgoing:       {}", t.outgoing);
    println!("Parquet parts:       {}", t.parts);
    println!("Total wall time:     {wall_secs:.2}s");
    println!("Row sink total:      {:.2}s", t.row_sinks.as_secs_f64());
    println!("Parquet write total: {:.2}s", t.object_sink.as_secs_f64());
}
