//! Process configuration.
//!
//! # Design Decisions
//! - Config is read from the environment once at startup and is
//!   immutable for the lifetime of the process
//! - Handlers receive it through application state, never by reading
//!   the environment ad hoc
//! - Absence of the upstream URL or credential is not validated here;
//!   it surfaces as an upstream failure on the first relayed request

/// Port used when `PORT` is unset or unparseable.
pub const DEFAULT_PORT: u16 = 3000;

/// Immutable configuration for the relay.
#[derive(Debug, Clone)]
pub struct RelayConfig {
    /// Base URL of the upstream completion API (e.g., "https://api.openai.com").
    pub upstream_base_url: String,

    /// Bearer credential injected into every outbound request.
    pub api_key: String,

    /// Port the relay listens on.
    pub port: u16,
}

impl RelayConfig {
    /// Load configuration from the process environment.
    ///
    /// Reads `AIHOST`, `OPENAI_API_KEY`, and `PORT`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary lookup function.
    ///
    /// Tests inject a fake lookup here instead of mutating the process
    /// environment.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            upstream_base_url: lookup("AIHOST").unwrap_or_default(),
            api_key: lookup("OPENAI_API_KEY").unwrap_or_default(),
            port: lookup("PORT")
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_PORT),
        }
    }

    /// Address the listener binds to.
    pub fn bind_address(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            upstream_base_url: String::new(),
            api_key: String::new(),
            port: DEFAULT_PORT,
        }
    }
}
