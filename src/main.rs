//! Chat Completion Relay
//!
//! A thin HTTP relay built with Tokio and Axum.
//!
//! # Architecture Overview
//!
//! ```text
//!                        ┌───────────────────────────────────────────┐
//!                        │                CHAT RELAY                  │
//!                        │                                            │
//!   Browser Request      │  ┌────────┐   ┌─────────┐   ┌──────────┐  │
//!   ─────────────────────┼─▶│  http  │──▶│  relay  │──▶│ upstream │──┼──▶ Completion
//!                        │  │ server │   │ handler │   │  client  │  │      API
//!   Browser Response     │  └────────┘   └─────────┘   └──────────┘  │
//!   ◀────────────────────┼── 200 + upstream JSON                     │
//!                        │   500 + fixed error envelope              │
//!                        │                                            │
//!                        │  Cross-cutting: config (env), CORS,        │
//!                        │  request IDs, tracing                      │
//!                        └───────────────────────────────────────────┘
//! ```
//!
//! The relay exists to keep the API credential out of client-side code
//! and to sidestep browser cross-origin restrictions. It validates
//! nothing, retries nothing, and caches nothing.

use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use chat_relay::config::RelayConfig;
use chat_relay::http::HttpServer;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "chat_relay=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("chat-relay v0.1.0 starting");

    // Load configuration from the environment (AIHOST, OPENAI_API_KEY, PORT)
    let config = RelayConfig::from_env();

    tracing::info!(
        bind_address = %config.bind_address(),
        upstream_base_url = %config.upstream_base_url,
        "Configuration loaded"
    );

    // Bind TCP listener
    let listener = TcpListener::bind(config.bind_address()).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(
        address = %local_addr,
        "Listening for connections"
    );

    // Create and run HTTP server
    let server = HttpServer::new(config);
    server.run(listener).await?;

    Ok(())
}
