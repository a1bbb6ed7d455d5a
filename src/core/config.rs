//! Configuration management for the gateway.
//!
//! This module provides a centralized configuration structure populated from
//! environment variables (optionally via a `.env` file) on top of defaults.

use super::transport::HttpConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{info, warn};

/// Main configuration structure for the gateway.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// HTTP listener configuration.
    pub transport: HttpConfig,

    /// Messaging bridge the WhatsApp operations talk to.
    pub bridge: BridgeConfig,

    /// Restrictions applied to files sent as media.
    pub security: SecurityConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the gateway as reported to clients.
    pub name: String,

    /// The version reported by `/health`.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,

    /// Whether to include timestamps in log output.
    pub with_timestamps: bool,
}

/// Connection settings for the WhatsApp bridge REST API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BridgeConfig {
    /// Base URL, e.g. `http://localhost:8080/api`.
    pub base_url: String,

    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

/// Configuration for media path validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecurityConfig {
    /// Optional directory every sent file must live under.
    /// If None, any existing regular file may be sent.
    pub media_root: Option<PathBuf>,

    /// Whether a symlink may be sent. Targets are still checked against
    /// `media_root`.
    pub allow_symlinks: bool,
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            media_root: None,
            allow_symlinks: true,
        }
    }
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080/api".to_string(),
            timeout_secs: 30,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "WhatsApp MCP HTTP API".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                with_timestamps: true,
            },
            transport: HttpConfig::default(),
            bridge: BridgeConfig::default(),
            security: SecurityConfig::default(),
        }
    }
}

/// Read an on/off environment switch, case-insensitively.
pub(crate) fn parse_switch(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Variables are prefixed with `MCP_`, e.g. `MCP_HOST`, `MCP_PORT`,
    /// `MCP_LOG_LEVEL`, `MCP_BRIDGE_URL`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        config.transport = HttpConfig::from_env();

        if let Ok(url) = std::env::var("MCP_BRIDGE_URL") {
            config.bridge.base_url = url;
        }

        if let Ok(timeout) = std::env::var("MCP_BRIDGE_TIMEOUT_SECS") {
            match timeout.parse() {
                Ok(secs) => config.bridge.timeout_secs = secs,
                Err(_) => warn!(
                    "Ignoring invalid MCP_BRIDGE_TIMEOUT_SECS '{}', using {}s",
                    timeout, config.bridge.timeout_secs
                ),
            }
        }

        if let Ok(root) = std::env::var("MCP_MEDIA_ROOT") {
            config.security.media_root = Some(PathBuf::from(root));
            info!("Media root set to {:?}", config.security.media_root);
        } else {
            warn!("MCP_MEDIA_ROOT not set - any existing file may be sent as media.");
        }

        if let Ok(raw) = std::env::var("MCP_ALLOW_SYMLINKS") {
            match parse_switch(&raw) {
                Some(allow) => config.security.allow_symlinks = allow,
                None => warn!(
                    "Ignoring invalid MCP_ALLOW_SYMLINKS '{}', using {}",
                    raw, config.security.allow_symlinks
                ),
            }
        }

        config
    }
}
