//! Serialization formats.
//!
//! - JSON-LD (node objects, the exchange wire format)
//! - N-Triples (line-based, for inspection)
//! - CSV (record input)

mod csv;
mod jsonld;
mod ntriples;

pub use self::csv::CsvSource;
pub use jsonld::{Document, JsonLd, NodeObject, Value};
pub use ntriples::NTriples;
