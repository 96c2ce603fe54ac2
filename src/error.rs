//! Error types for the relay.
//!
//! Every failure on the outbound leg maps to the same caller-facing
//! response: `500` with a fixed envelope. The distinction between
//! variants exists for the server-side log, never for the caller.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

/// Failure while relaying a request upstream.
#[derive(Debug, Error)]
pub enum RelayError {
    /// The outbound call itself failed (connect refused, DNS, bad URL,
    /// connection dropped mid-response).
    #[error("upstream request failed: {0}")]
    Upstream(reqwest::Error),

    /// The upstream responded, but its body could not be parsed as JSON.
    #[error("upstream returned a non-JSON body: {0}")]
    InvalidJson(reqwest::Error),
}

/// Fixed envelope returned to callers on any relay failure.
#[derive(Serialize)]
struct ErrorBody {
    error: &'static str,
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorBody {
                error: "Failed to process request",
            }),
        )
            .into_response()
    }
}
