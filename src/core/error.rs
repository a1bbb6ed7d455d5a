//! Error types and handling for the gateway.
//!
//! This module defines a unified error type that can represent errors from
//! all domains and from the transport, used where the gateway is assembled
//! and started.

use thiserror::Error;

/// A specialized Result type for gateway operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the gateway.
#[derive(Debug, Error)]
pub enum Error {
    /// Error originating from the tools domain.
    #[error("Tool error: {0}")]
    Tool(#[from] crate::domains::tools::ToolError),

    /// Error originating from the WhatsApp backend.
    #[error("Backend error: {0}")]
    Backend(#[from] crate::domains::whatsapp::BackendError),

    /// Error raised by the HTTP listener.
    #[error("Transport error: {0}")]
    Transport(#[from] crate::core::transport::TransportError),

    /// Configuration-related errors.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Create a new configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
