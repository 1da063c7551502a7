//! Exchange Manager HTTP client.

use pizzakb_core::{Document, ExchangeConfig, InsertGraphRequest, Submit, SubmissionOutcome};
use tracing::{debug, warn};
use ureq::Agent;

/// Largest response body kept for reporting.
const MAX_RESPONSE_BODY: u64 = 64 * 1024 * 1024;

/// Posts `insert_graph` requests to the Exchange Manager.
///
/// One attempt per submission. Any HTTP status comes back as
/// [`SubmissionOutcome::Delivered`]; only transport errors become
/// [`SubmissionOutcome::TransportFailed`].
pub struct ExchangeClient {
    config: ExchangeConfig,
    agent: Agent,
}

impl ExchangeClient {
    /// Build a client; the agent's global timeout comes from the config.
    pub fn new(config: ExchangeConfig) -> Self {
        let agent: Agent = Agent::config_builder()
            .timeout_global(Some(config.timeout))
            .http_status_as_error(false)
            .build()
            .into();
        Self { config, agent }
    }

    /// Connection settings this client posts with.
    pub fn config(&self) -> &ExchangeConfig {
        &self.config
    }
}

impl Submit for ExchangeClient {
    fn submit(&self, document: &Document, roots: &[String]) -> SubmissionOutcome {
        let url = self.config.requests_url();
        let request = InsertGraphRequest::new(&self.config.client_name, document, roots);
        debug!(%url, nodes = document.nodes().len(), "posting insert_graph request");

        // send_json sets Content-Type: application/json
        let response = self
            .agent
            .post(url.as_str())
            .header("x-api-key", self.config.api_key.as_str())
            .header("Accept", "application/json")
            .send_json(&request);

        match response {
            Ok(mut response) => {
                let status = response.status().as_u16();
                let body = response
                    .body_mut()
                    .with_config()
                    .limit(MAX_RESPONSE_BODY)
                    .read_to_string()
                    .unwrap_or_else(|err| {
                        warn!(status, "failed reading exchange response body: {err}");
                        format!("<unreadable response body: {err}>")
                    });
                SubmissionOutcome::Delivered { status, body }
            }
            Err(err) => SubmissionOutcome::TransportFailed {
                reason: format!("request to {url} failed: {err}"),
            },
        }
    }
}
