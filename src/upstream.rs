//! Outbound client for the upstream completion API.
//!
//! # Responsibilities
//! - Issue `POST {base}/v1/chat/completions` with the inbound body
//!   forwarded verbatim
//! - Inject the server-held bearer credential; inbound headers are
//!   never forwarded
//! - Parse the upstream body as JSON
//!
//! # Design Decisions
//! - The upstream HTTP status is not inspected: any response whose body
//!   parses as JSON is relayed as a success. Callers that need to
//!   distinguish upstream errors must inspect the payload.
//! - No retries and no total request timeout are configured; a stalled
//!   upstream stalls the individual request, not the process.

use axum::body::Bytes;
use axum::http::header;
use serde_json::Value;

use crate::config::RelayConfig;
use crate::error::RelayError;

/// Client for the configured upstream completion API.
///
/// Cheap to share: the inner `reqwest::Client` pools connections.
pub struct UpstreamClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl UpstreamClient {
    /// Create a client for the upstream named in the given config.
    pub fn new(config: &RelayConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: config.upstream_base_url.clone(),
            api_key: config.api_key.clone(),
        }
    }

    /// Forward a chat-completion payload and parse the response as JSON.
    ///
    /// `body` is sent byte-for-byte as received from the caller.
    pub async fn chat_completions(&self, body: Bytes) -> Result<Value, RelayError> {
        let url = format!("{}/v1/chat/completions", self.base_url);

        let response = self
            .client
            .post(&url)
            .header(header::CONTENT_TYPE, "application/json")
            .bearer_auth(&self.api_key)
            .body(body)
            .send()
            .await
            .map_err(RelayError::Upstream)?;

        response.json().await.map_err(RelayError::InvalidJson)
    }
}
