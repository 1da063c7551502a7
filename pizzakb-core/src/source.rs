use crate::{RawRecord, Result};

/// Anything that can hand over the records of one pipeline run, in order.
///
/// See [`CsvSource`](crate::formats::CsvSource) for the file-backed implementation.
pub trait RecordSource {
    /// Read all records.
    fn records(&mut self) -> Result<Vec<RawRecord>>;
}
