//! CSV record source.
//!
//! The first row is the header. Only the requested columns are read, by header name; the
//! rest of the file is ignored.

use crate::{RawRecord, RecordSource, Result};
use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// Reads [`RawRecord`]s from a headered CSV file.
///
/// # Example
///
/// ```rust
/// use pizzakb_core::formats::CsvSource;
/// use pizzakb_core::RecordSource;
///
/// let data = "pizza_name,pizza_price,notes\nMargherita,10.00,x\n";
/// let mut source =
///     CsvSource::from_reader(data.as_bytes(), &["pizza_name", "pizza_price"]).unwrap();
///
/// let records = source.records().unwrap();
/// assert_eq!(records[0]["pizza_name"], "Margherita");
/// assert!(!records[0].contains_key("notes"));
/// ```
pub struct CsvSource<R> {
    reader: ::csv::Reader<R>,
    columns: HashMap<String, usize>,
}

impl CsvSource<File> {
    /// Open a CSV file and map the requested columns against its header.
    pub fn open(path: impl AsRef<Path>, columns: &[&str]) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(file, columns)
    }
}

impl<R: Read> CsvSource<R> {
    /// Wrap a reader and map the requested columns against its header.
    ///
    /// Requested columns missing from the header are skipped.
    pub fn from_reader(reader: R, columns: &[&str]) -> Result<Self> {
        let mut reader = ::csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let mut mapped = HashMap::with_capacity(columns.len());
        for (index, name) in reader.headers()?.iter().enumerate() {
            if columns.contains(&name) {
                mapped.entry(name.to_string()).or_insert(index);
            }
        }
        debug!(?mapped, "mapped csv columns");

        Ok(Self {
            reader,
            columns: mapped,
        })
    }

    /// Column name to header index, for the requested columns that were found.
    pub fn column_map(&self) -> &HashMap<String, usize> {
        &self.columns
    }
}

impl<R: Read> RecordSource for CsvSource<R> {
    /// Read every remaining data row.
    ///
    /// A row shorter than the header simply lacks the trailing fields.
    fn records(&mut self) -> Result<Vec<RawRecord>> {
        let mut records = Vec::new();
        for row in self.reader.records() {
            let row = row?;
            let record: RawRecord = self
                .columns
                .iter()
                .filter_map(|(name, &index)| row.get(index).map(|v| (name.clone(), v.to_string())))
                .collect();
            records.push(record);
        }
        Ok(records)
    }
}
