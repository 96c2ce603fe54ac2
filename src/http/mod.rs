//! HTTP surface of the relay.
//!
//! # Data Flow
//! ```text
//! POST /api/chat (arbitrary JSON body)
//!     → server.rs (Axum setup, CORS, request ID, tracing)
//!     → relay.rs (forward body upstream, parse JSON response)
//!     → 200 + upstream JSON, or 500 + fixed error envelope
//! ```

pub mod relay;
pub mod server;

pub use server::{AppState, HttpServer};
