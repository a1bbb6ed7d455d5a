//! Errors raised by WhatsApp backend operations.

use thiserror::Error;

use crate::core::security::MediaPathError;

/// Result type for backend operations.
pub type BackendResult<T> = Result<T, BackendError>;

/// Errors that can occur while talking to the messaging backend.
#[derive(Debug, Error)]
pub enum BackendError {
    /// The request never produced a response (connect, timeout, decode).
    #[error("Bridge request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The bridge answered with a non-success status.
    #[error("Bridge returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// The bridge accepted the request but refused the operation.
    #[error("{0}")]
    Rejected(String),

    /// The file to send failed validation.
    #[error(transparent)]
    MediaPath(#[from] MediaPathError),

    /// Any other failure inside the backend.
    #[error("{0}")]
    Other(String),
}

impl BackendError {
    pub fn status(status: u16, body: impl Into<String>) -> Self {
        Self::Status {
            status,
            body: body.into(),
        }
    }

    pub fn rejected(msg: impl Into<String>) -> Self {
        Self::Rejected(msg.into())
    }

    pub fn other(msg: impl Into<String>) -> Self {
        Self::Other(msg.into())
    }
}
