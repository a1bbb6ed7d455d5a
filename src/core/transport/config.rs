//! HTTP listener configuration.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::config::parse_switch;

const DEFAULT_PORT: u16 = 8000;

/// HTTP transport configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Port number to listen on.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Host address to bind to.
    #[serde(default = "default_host")]
    pub host: String,

    /// Enable permissive CORS for browser and workflow-tool clients.
    #[serde(default = "default_cors")]
    pub enable_cors: bool,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

fn default_cors() -> bool {
    true
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            host: default_host(),
            enable_cors: default_cors(),
        }
    }
}

impl HttpConfig {
    /// Create an HTTP config for the given address.
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            port,
            host: host.into(),
            ..Default::default()
        }
    }

    /// Load from `MCP_HOST`, `MCP_PORT` and `MCP_HTTP_CORS`.
    pub fn from_env() -> Self {
        let port = match std::env::var("MCP_PORT") {
            Ok(raw) => raw.parse().unwrap_or_else(|_| {
                warn!("Ignoring invalid MCP_PORT '{}', using {}", raw, DEFAULT_PORT);
                DEFAULT_PORT
            }),
            Err(_) => DEFAULT_PORT,
        };
        let host = std::env::var("MCP_HOST").unwrap_or_else(|_| default_host());
        let enable_cors = match std::env::var("MCP_HTTP_CORS") {
            Ok(raw) => parse_switch(&raw).unwrap_or_else(|| {
                warn!("Ignoring invalid MCP_HTTP_CORS '{}', using true", raw);
                true
            }),
            Err(_) => true,
        };

        Self {
            port,
            host,
            enable_cors,
        }
    }

    /// The `host:port` string to bind.
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
