//! Tool-specific error types.

use thiserror::Error;

/// Errors that can occur while registering, resolving or running a tool.
#[derive(Debug, Error)]
pub enum ToolError {
    /// The requested tool was not found.
    #[error("Tool '{0}' not found")]
    NotFound(String),

    /// A tool with the same name is already registered.
    #[error("Tool '{0}' is already registered")]
    Duplicate(String),

    /// The arguments could not be bound to the handler's parameters.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// The handler ran and failed.
    #[error("{0}")]
    ExecutionFailed(String),
}

impl ToolError {
    /// Create a new "not found" error.
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound(name.into())
    }

    /// Create a new "duplicate" error.
    pub fn duplicate(name: impl Into<String>) -> Self {
        Self::Duplicate(name.into())
    }

    /// Create a new "invalid arguments" error.
    pub fn invalid_arguments(msg: impl Into<String>) -> Self {
        Self::InvalidArguments(msg.into())
    }

    /// Create a new "execution failed" error.
    pub fn execution_failed(msg: impl Into<String>) -> Self {
        Self::ExecutionFailed(msg.into())
    }
}

impl From<crate::domains::whatsapp::BackendError> for ToolError {
    fn from(err: crate::domains::whatsapp::BackendError) -> Self {
        Self::ExecutionFailed(err.to_string())
    }
}
