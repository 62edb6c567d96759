//! Object stores for part files.
//!
//! Keys follow the lake layout
//! `prefix/direction=<dir>/date=<YYYY-MM-DD>/part-<NNNNN>.parquet`.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use bx_core::Direction;

use crate::{OutputError, OutputResult};

/// Key/value blob storage.
pub trait ObjectStore {
    fn put(&mut self, key: &str, bytes: Vec<u8>) -> OutputResult<()>;
}

/// Stores objects as files below a root directory; `/` in keys become
/// directory separators.
#[derive(Clone, Debug)]
pub struct LocalObjectStore {
    root: PathBuf,
}

impl LocalObjectStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// File path an object key maps to.
    pub fn path_of(&self, key: &str) -> OutputResult<PathBuf> {
        let mut path = self.root.clone();
        for segment in key.split('/') {
            if segment.is_empty() || segment == "." || segment == ".." {
                return Err(OutputError::Key(key.to_owned()));
            }
            path.push(segment);
        }
        Ok(path)
    }
}

impl ObjectStore for LocalObjectStore {
    fn put(&mut self, key: &str, bytes: Vec<u8>) -> OutputResult<()> {
        let path = self.path_of(key)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, bytes)?;
        Ok(())
    }
}

/// Object key of one part file.  Trailing `/` on `prefix` is ignored; an
/// empty prefix yields a key starting at `direction=`.
pub fn partition_key(prefix: &str, direction: Direction, day: NaiveDate, part: u32) -> String {
    let prefix = prefix.trim_end_matches('/');
    let tail = format!(
        "direction={}/date={}/part-{part:05}.parquet",
        direction.as_str(),
        day.format("%Y-%m-%d"),
    );
    if prefix.is_empty() { tail } else { format!("{prefix}/{tail}") }
}
