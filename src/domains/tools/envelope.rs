//! Response envelopes.
//!
//! Two shapes leave the gateway: the generic [`ResponseEnvelope`] returned by
//! `/execute`, and the [`FacadeEnvelope`] returned by the typed convenience
//! routes on their success path.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::InvocationOutcome;

/// Generic success/error wrapper. Both `data` and `error` are always
/// serialized, as `null` when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseEnvelope {
    /// Whether the execution was successful.
    pub success: bool,

    /// The result data from the tool.
    pub data: Option<Value>,

    /// Error message if execution failed.
    pub error: Option<String>,
}

impl ResponseEnvelope {
    pub fn success(data: Value) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.into()),
        }
    }
}

impl From<InvocationOutcome> for ResponseEnvelope {
    fn from(outcome: InvocationOutcome) -> Self {
        match outcome {
            InvocationOutcome::Success(value) => Self::success(value),
            InvocationOutcome::Failure(failure) => Self::failure(failure.message()),
        }
    }
}

/// Success body of the convenience routes: `{success: true, data}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FacadeEnvelope {
    pub success: bool,
    pub data: Value,
}

impl FacadeEnvelope {
    pub fn success(data: Value) -> Self {
        Self {
            success: true,
            data,
        }
    }
}
