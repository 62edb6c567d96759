//! Parquet object sink (feature `parquet`).
//!
//! Each part is encoded into an in-memory buffer and handed to an
//! [`ObjectStore`] under its partition key.

use std::sync::Arc;

use arrow::array::{ArrayRef, StringArray, TimestampSecondArray};
use arrow::datatypes::{DataType, Field, Schema, TimeUnit};
use arrow::record_batch::RecordBatch;
use chrono::NaiveDate;
use parquet::arrow::ArrowWriter;
use parquet::basic::{Compression as ParquetCompression, ZstdLevel};
use parquet::file::properties::WriterProperties;
use tracing::debug;

use bx_core::{CrossingEvent, Direction, EVENT_COLUMNS};

use crate::OutputResult;
use crate::store::{ObjectStore, partition_key};
use crate::writer::ObjectSink;

/// Default maximum rows per Parquet row group.
pub const DEFAULT_ROW_GROUP_SIZE: usize = 250_000;

/// Part-file compression codec.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Compression {
    Snappy,
    #[default]
    Zstd,
}

impl Compression {
    fn codec(self) -> ParquetCompression {
        match self {
            Compression::Snappy => ParquetCompression::SNAPPY,
            Compression::Zstd => ParquetCompression::ZSTD(ZstdLevel::default()),
        }
    }
}

/// Arrow schema of a part file: a UTC second-resolution timestamp followed
/// by the six string columns.
pub fn event_schema() -> Arc<Schema> {
    let mut fields = vec![Field::new(
        EVENT_COLUMNS[0],
        DataType::Timestamp(TimeUnit::Second, Some("UTC".into())),
        false,
    )];
    fields.extend(EVENT_COLUMNS[1..].iter().map(|name| Field::new(*name, DataType::Utf8, false)));
    Arc::new(Schema::new(fields))
}

/// Writes each part as a standalone Parquet object.
pub struct ParquetObjectSink<S: ObjectStore> {
    store:  S,
    prefix: String,
    schema: Arc<Schema>,
    props:  WriterProperties,
    parts:  u64,
    bytes:  u64,
}

impl<S: ObjectStore> ParquetObjectSink<S> {
    /// `prefix` is the key prefix inside the store (trailing `/` trimmed).
    pub fn new(store: S, prefix: &str, compression: Compression) -> Self {
        Self::with_row_group_size(store, prefix, compression, DEFAULT_ROW_GROUP_SIZE)
    }

    pub fn with_row_group_size(store: S, prefix: &str, compression: Compression, row_group_size: usize) -> Self {
        let props = WriterProperties::builder()
            .set_compression(compression.codec())
            .set_max_row_group_size(row_group_size.max(1))
            .build();
        Self {
            store,
            prefix: prefix.trim_end_matches('/').to_owned(),
            schema: event_schema(),
            props,
            parts: 0,
            bytes: 0,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Parts written so far.
    pub fn parts_written(&self) -> u64 {
        self.parts
    }

    /// Encoded bytes handed to the store so far.
    pub fn bytes_written(&self) -> u64 {
        self.bytes
    }

    fn record_batch(&self, rows: &[CrossingEvent]) -> OutputResult<RecordBatch> {
        let ts = TimestampSecondArray::from_iter_values(rows.iter().map(|e| e.ts.timestamp()))
            .with_timezone("UTC");
        let columns: Vec<ArrayRef> = vec![
            Arc::new(ts),
            Arc::new(StringArray::from_iter_values(rows.iter().map(|e| e.identity.country))),
            Arc::new(StringArray::from_iter_values(rows.iter().map(|e| e.identity.plate.as_str()))),
            Arc::new(StringArray::from_iter_values(rows.iter().map(|e| e.identity.vehicle_type.as_str()))),
            Arc::new(StringArray::from_iter_values(rows.iter().map(|e| e.identity.colour.as_str()))),
            Arc::new(StringArray::from_iter_values(rows.iter().map(|e| e.identity.brand))),
            Arc::new(StringArray::from_iter_values(rows.iter().map(|e| e.location))),
        ];
        Ok(RecordBatch::try_new(Arc::clone(&self.schema), columns)?)
    }

    fn encode(&self, rows: &[CrossingEvent]) -> OutputResult<Vec<u8>> {
        let batch = self.record_batch(rows)?;
        let mut buf = Vec::new();
        let mut writer = ArrowWriter::try_new(&mut buf, Arc::clone(&self.schema), Some(self.props.clone()))?;
        writer.write(&batch)?;
        writer.close()?;
        Ok(buf)
    }
}

impl<S: ObjectStore> ObjectSink for ParquetObjectSink<S> {
    fn put_part(&mut self, direction: Direction, day: NaiveDate, part: u32, rows: &[CrossingEvent]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let key = partition_key(&self.prefix, direction, day, part);
        let bytes = self.encode(rows)?;
        let len = bytes.len() as u64;
        self.store.put(&key, bytes)?;
        self.parts += 1;
        self.bytes += len;
        debug!(%key, rows = rows.len(), bytes = len, "part written");
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        Ok(())
    }
}
