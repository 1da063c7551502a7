//! Core types for turning pizza menu records into a knowledge graph.
//!
//! The pipeline is:
//!
//! - [`RawRecord`] / [`PizzaRecord`] - one flat record from a record source
//! - [`Pizza`] - the normalized menu item, with a write-once [`PizzaId`]
//! - [`TripleBuilder`] - emits three [`Triple`]s per pizza into a [`Graph`]
//! - [`formats::JsonLd`] - turns the graph into a JSON-LD [`Document`]
//! - [`Pipeline`] - wires the above and hands the document to a [`Submit`] sink
//!
//! # Example
//!
//! ```rust
//! use pizzakb_core::{Pipeline, RawRecord};
//!
//! let mut record = RawRecord::new();
//! record.insert("pizza_id".into(), "1".into());
//! record.insert("pizza_name".into(), "Margherita".into());
//! record.insert("pizza_price".into(), "10.00".into());
//!
//! let ingested = Pipeline::default().ingest(&[record]).unwrap();
//! assert_eq!(ingested.graph.triple_count(), 3);
//! assert_eq!(ingested.document.nodes().len(), 1);
//! assert!(ingested.document.root().is_some());
//! ```

mod error;
pub mod exchange;
pub mod formats;
mod graph;
mod identity;
mod pipeline;
mod pizza;
pub mod record;
mod source;
mod triple;
pub mod vocab;

pub use error::{Error, Result};
pub use exchange::{ExchangeConfig, InsertGraphRequest, Submit, SubmissionOutcome};
pub use formats::{Document, NodeObject, Value};
pub use graph::{Graph, GraphStats, TripleBuilder};
pub use identity::PizzaId;
pub use pipeline::{Ingested, Pipeline};
pub use pizza::{Pizza, DEFAULT_PRICE};
pub use record::{PizzaRecord, RawRecord};
pub use source::RecordSource;
pub use triple::{Literal, Term, Triple};
pub use vocab::Vocabulary;
