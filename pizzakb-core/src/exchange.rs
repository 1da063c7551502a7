//! Hand-off of a serialized graph to the Exchange Manager.
//!
//! This module holds the sink contract ([`Submit`]), its outcome type, the request envelope
//! the exchange expects, and the connection settings. The HTTP transport itself lives with
//! the binary.

use crate::{Document, Error, Result};
use serde::Serialize;
use std::time::Duration;

/// Request timeout used when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(500);

/// What happened to one submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// The exchange answered, with any status.
    Delivered {
        /// HTTP status code.
        status: u16,
        /// Response body, as text.
        body: String,
    },
    /// No answer: connection refused, timeout, bad URL.
    TransportFailed {
        /// Human-readable cause.
        reason: String,
    },
}

impl SubmissionOutcome {
    /// Whether the exchange accepted the graph (status in `[200, 300)`).
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Delivered { status, .. } if (200..300).contains(status))
    }

    /// The status code, if the exchange answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Delivered { status, .. } => Some(*status),
            Self::TransportFailed { .. } => None,
        }
    }

    /// The response body, or the transport failure reason.
    pub fn body(&self) -> &str {
        match self {
            Self::Delivered { body, .. } => body,
            Self::TransportFailed { reason } => reason,
        }
    }
}

/// A sink that accepts a document and its declared roots.
///
/// Implementations make a single attempt and report the result; they do not retry.
pub trait Submit {
    /// Submit `document`, declaring `roots` as its entry points.
    fn submit(&self, document: &Document, roots: &[String]) -> SubmissionOutcome;
}

impl<S: Submit + ?Sized> Submit for &S {
    fn submit(&self, document: &Document, roots: &[String]) -> SubmissionOutcome {
        (**self).submit(document, roots)
    }
}

/// The `insert_graph` request envelope.
///
/// ```json
/// {
///   "item_name": "insert_graph",
///   "priority": "normal",
///   "client_name": "pizza_service",
///   "inputs": {"graph": {"type": "graph", "value": [{"@graph": [...]}], "roots": ["..."]}}
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct InsertGraphRequest<'a> {
    item_name: &'static str,
    priority: &'static str,
    client_name: &'a str,
    inputs: Inputs<'a>,
}

#[derive(Debug, Clone, Serialize)]
struct Inputs<'a> {
    graph: GraphInput<'a>,
}

#[derive(Debug, Clone, Serialize)]
struct GraphInput<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    value: [GraphValue<'a>; 1],
    roots: &'a [String],
}

#[derive(Debug, Clone, Serialize)]
struct GraphValue<'a> {
    #[serde(rename = "@graph")]
    graph: &'a Document,
}

impl<'a> InsertGraphRequest<'a> {
    /// Wrap a document for submission on behalf of `client_name`.
    pub fn new(client_name: &'a str, document: &'a Document, roots: &'a [String]) -> Self {
        Self {
            item_name: "insert_graph",
            priority: "normal",
            client_name,
            inputs: Inputs {
                graph: GraphInput {
                    kind: "graph",
                    value: [GraphValue { graph: document }],
                    roots,
                },
            },
        }
    }

    /// The envelope as JSON.
    pub fn to_value(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }
}

/// Where and as whom to submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExchangeConfig {
    /// Base URL of the exchange API, without the `/v1/requests` path.
    pub base_url: String,
    /// Value of the `x-api-key` header.
    pub api_key: String,
    /// Client name placed in every request envelope.
    pub client_name: String,
    /// Overall timeout of one request.
    pub timeout: Duration,
}

impl ExchangeConfig {
    /// Validate and build a configuration. Every field must be non-empty.
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        client_name: impl Into<String>,
    ) -> Result<Self> {
        let config = Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            client_name: client_name.into(),
            timeout: DEFAULT_TIMEOUT,
        };

        let missing: Vec<&str> = [
            ("base_url", &config.base_url),
            ("api_key", &config.api_key),
            ("client_name", &config.client_name),
        ]
        .into_iter()
        .filter(|(_, v)| v.trim().is_empty())
        .map(|(name, _)| name)
        .collect();

        if !missing.is_empty() {
            return Err(Error::Config(format!(
                "all exchange parameters must be provided, missing: {}",
                missing.join(", ")
            )));
        }
        Ok(config)
    }

    /// Override the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Endpoint that accepts request envelopes.
    pub fn requests_url(&self) -> String {
        format!("{}/v1/requests", self.base_url)
    }
}
