//! Chat Completion Relay Library
//!
//! Receives a chat-completion request from a browser client, forwards
//! it unmodified to a configured upstream API with a server-held bearer
//! credential, and relays the JSON response back.

pub mod config;
pub mod error;
pub mod http;
pub mod upstream;

pub use config::RelayConfig;
pub use error::RelayError;
pub use http::HttpServer;
