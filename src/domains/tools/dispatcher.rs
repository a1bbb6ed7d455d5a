//! Dispatcher - resolves a tool by name and runs it.
//!
//! This is the single boundary where handler failures are caught. Whatever
//! goes wrong inside a handler (bad arguments, backend errors, even a panic)
//! comes out as [`InvocationFailure::HandlerFailed`]; only an unknown name is
//! reported differently.

use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use futures::FutureExt;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{error, info, instrument};

use super::{Arguments, ToolRegistry};

/// A request to run one tool.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvocationRequest {
    /// The name of the tool to execute.
    pub tool_name: String,

    /// The arguments to pass to the tool.
    #[serde(default)]
    pub arguments: Arguments,
}

/// Why an invocation produced no value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvocationFailure {
    /// No tool with this name is registered.
    ToolNotFound(String),

    /// The handler ran and failed; carries the failure text.
    HandlerFailed(String),
}

impl InvocationFailure {
    /// Human readable description of the failure.
    pub fn message(&self) -> String {
        match self {
            Self::ToolNotFound(name) => format!("Tool '{}' not found", name),
            Self::HandlerFailed(msg) => msg.clone(),
        }
    }
}

/// Result of a single invocation.
#[derive(Debug, Clone, PartialEq)]
pub enum InvocationOutcome {
    Success(Value),
    Failure(InvocationFailure),
}

/// Dispatches invocations against a shared registry.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    registry: Arc<ToolRegistry>,
}

impl Dispatcher {
    pub fn new(registry: Arc<ToolRegistry>) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &Arc<ToolRegistry> {
        &self.registry
    }

    /// Run `tool_name` with `arguments` and wait for its outcome.
    #[instrument(skip(self, arguments))]
    pub async fn invoke(&self, tool_name: &str, arguments: Arguments) -> InvocationOutcome {
        let tool = match self.registry.lookup(tool_name) {
            Ok(tool) => tool,
            Err(_) => {
                return InvocationOutcome::Failure(InvocationFailure::ToolNotFound(
                    tool_name.to_string(),
                ));
            }
        };

        info!("Executing tool: {} with args: {:?}", tool_name, arguments);

        let call = AssertUnwindSafe(tool.handler().call(arguments)).catch_unwind();
        match call.await {
            Ok(Ok(value)) => InvocationOutcome::Success(value),
            Ok(Err(e)) => {
                error!("Error executing tool {}: {}", tool_name, e);
                InvocationOutcome::Failure(InvocationFailure::HandlerFailed(e.to_string()))
            }
            Err(panic) => {
                let msg = panic_message(panic.as_ref());
                error!("Tool {} panicked: {}", tool_name, msg);
                InvocationOutcome::Failure(InvocationFailure::HandlerFailed(msg))
            }
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        format!("Tool panicked: {}", s)
    } else if let Some(s) = payload.downcast_ref::<String>() {
        format!("Tool panicked: {}", s)
    } else {
        "Tool panicked".to_string()
    }
}
