//! Command-line arguments and configuration layering.
//!
//! Precedence, lowest first: `SimConfig::default()`, the TOML file given with
//! `--config`, then every flag that was passed explicitly.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, ValueEnum};

use bx_core::SimConfig;
use bx_output::Compression;

/// Synthetic border-crossing event generator.
#[derive(Parser, Debug)]
#[command(name = "crossgen", version, about)]
pub struct Args {
    /// TOML file with `SimConfig` keys; flags override it.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Run length in years of 365 days.  Replaces a `days` key from
    /// --config unless --days is also given.
    #[arg(long)]
    pub years: Option<u32>,

    /// Run length in days (overrides --years).
    #[arg(long)]
    pub days: Option<u64>,

    /// First simulated day, YYYY-MM-DD (UTC).
    #[arg(long)]
    pub start_date: Option<NaiveDate>,

    #[arg(long)]
    pub avg_in_per_day: Option<u64>,

    #[arg(long)]
    pub avg_out_per_day: Option<u64>,

    /// ± jitter factor around the daily averages (0.12 = ±12%).
    #[arg(long)]
    pub day_jitter: Option<f64>,

    #[arg(long)]
    pub seed: Option<u64>,

    /// Rows per sink write and per Parquet part.
    #[arg(long)]
    pub chunk_rows: Option<usize>,

    /// Probability that a standout crossing goes unrecorded.
    #[arg(long)]
    pub missing_prob: Option<f64>,

    #[arg(long)]
    pub commuters: Option<usize>,

    #[arg(long)]
    pub chilled: Option<usize>,

    #[arg(long)]
    pub smugglers: Option<usize>,

    #[arg(long)]
    pub misplace_per_day: Option<usize>,

    #[arg(long)]
    pub misplace_max_offset: Option<usize>,

    #[arg(long, hide = true)]
    pub anomaly_per_day: Option<usize>,

    #[arg(long, hide = true)]
    pub anomaly_max_day_shift: Option<usize>,

    /// SQLite database to write rows to (repeatable; every target gets every row).
    #[arg(long = "sqlite", value_name = "PATH")]
    pub sqlite: Vec<PathBuf>,

    /// Directory for CSV output, used when no --sqlite target is given.
    #[arg(long, default_value = "output")]
    pub csv_dir: PathBuf,

    /// Root directory of the Parquet lake.
    #[arg(long, default_value = "output/lake")]
    pub lake_dir: PathBuf,

    /// Key prefix inside the lake.
    #[arg(long, default_value = "vehicles")]
    pub lake_prefix: String,

    #[arg(long, value_enum, default_value_t = LakeCompression::Zstd)]
    pub compression: LakeCompression,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum LakeCompression {
    Snappy,
    #[default]
    Zstd,
}

impl From<LakeCompression> for Compression {
    fn from(c: LakeCompression) -> Self {
        match c {
            LakeCompression::Snappy => Compression::Snappy,
            LakeCompression::Zstd => Compression::Zstd,
        }
    }
}

impl Args {
    /// Build the validated run configuration.
    pub fn resolve(&self) -> Result<SimConfig> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => SimConfig::default(),
        };
        self.apply(&mut config);
        config.validate().context("invalid configuration")?;
        Ok(config)
    }

    /// Overwrite `config` with every flag that was given.
    pub fn apply(&self, config: &mut SimConfig) {
        fn set<T: Clone>(slot: &mut T, flag: &Option<T>) {
            if let Some(v) = flag {
                *slot = v.clone();
            }
        }

        set(&mut config.years, &self.years);
        if self.days.is_some() {
            config.days = self.days;
        } else if self.years.is_some() {
            config.days = None;
        }
        set(&mut config.start_date, &self.start_date);
        set(&mut config.avg_in_per_day, &self.avg_in_per_day);
        set(&mut config.avg_out_per_day, &self.avg_out_per_day);
        set(&mut config.day_jitter, &self.day_jitter);
        set(&mut config.seed, &self.seed);
        set(&mut config.chunk_rows, &self.chunk_rows);
        set(&mut config.missing_prob, &self.missing_prob);
        set(&mut config.commuters, &self.commuters);
        set(&mut config.chilled, &self.chilled);
        set(&mut config.smugglers, &self.smugglers);
        set(&mut config.misplace_per_day, &self.misplace_per_day);
        set(&mut config.misplace_max_offset, &self.misplace_max_offset);
        // Legacy spellings win over the current ones.
        set(&mut config.misplace_per_day, &self.anomaly_per_day);
        set(&mut config.misplace_max_offset, &self.anomaly_max_day_shift);
    }

    /// `--sqlite` targets in first-seen order, duplicates removed.
    pub fn sqlite_targets(&self) -> Vec<PathBuf> {
        let mut targets: Vec<PathBuf> = Vec::with_capacity(self.sqlite.len());
        for path in &self.sqlite {
            if !targets.contains(path) {
                targets.push(path.clone());
            }
        }
        targets
    }

    pub fn lake_prefix(&self) -> &str {
        self.lake_prefix.trim_end_matches('/')
    }
}

/// Parse a TOML config file.  Missing keys keep their defaults.
pub fn load_config(path: &Path) -> Result<SimConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("reading config file {}", path.display()))?;
    parse_config(&content).with_context(|| format!("parsing config file {}", path.display()))
}

pub fn parse_config(content: &str) -> Result<SimConfig> {
    Ok(toml::from_str(content)?)
}
