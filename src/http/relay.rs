//! The relay handler.
//!
//! # Responsibilities
//! - Take the inbound body as opaque bytes (pass-through stays
//!   byte-for-byte; no schema is enforced)
//! - Forward it upstream and return the upstream JSON at 200
//! - Convert any failure to the fixed 500 envelope, logging the detail
//!   server-side only

use axum::body::Bytes;
use axum::extract::State;
use axum::http::HeaderMap;
use axum::Json;
use serde_json::Value;

use crate::error::RelayError;
use crate::http::server::AppState;

/// Relay a chat-completion request to the configured upstream.
///
/// The response status is 200 whenever the upstream body parses as
/// JSON, even if that JSON encodes an upstream error.
pub async fn relay_chat(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<Value>, RelayError> {
    let request_id = headers
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown")
        .to_string();

    tracing::debug!(
        request_id = %request_id,
        body_bytes = body.len(),
        "Relaying chat completion request"
    );

    let data = state
        .upstream
        .chat_completions(body)
        .await
        .inspect_err(|error| {
            tracing::error!(
                request_id = %request_id,
                error = %error,
                "Relay request failed"
            );
        })?;

    Ok(Json(data))
}
