//! Error types for pizzakb-core.

use thiserror::Error;

/// Error type for graph construction, serialization and record loading.
#[derive(Error, Debug)]
pub enum Error {
    /// A triple that has no JSON-LD rendering (e.g. `rdf:type` pointing at a literal).
    #[error("Cannot render triple as JSON-LD: {0}")]
    Unrenderable(String),

    /// A JSON-LD document that does not have the expected node shape.
    #[error("Invalid JSON-LD document: {0}")]
    ParseDocument(String),

    /// The document has no node, so no root can be declared.
    #[error("Document is empty: no root node to declare")]
    EmptyDocument,

    /// Missing or invalid exchange configuration.
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// CSV error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for pizzakb operations.
pub type Result<T> = std::result::Result<T, Error>;
