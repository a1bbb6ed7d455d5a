//! Tools domain module.
//!
//! Everything needed to run a named tool over the generic `/execute` path.
//!
//! ## Architecture
//!
//! - `registry.rs` - name-keyed table of [`ToolDefinition`]s, built once
//! - `handlers.rs` - the [`ToolHandler`] trait and argument binding helpers
//! - `dispatcher.rs` - lookup + invoke, collapsing failures to an outcome
//! - `envelope.rs` - response shapes returned to HTTP callers
//! - `definitions/` - the WhatsApp tools and the registry builder
//! - `error.rs` - tool-specific error types
//!
//! ## Adding a New Tool
//!
//! 1. Add its parameter struct and backend method in `domains/whatsapp`
//! 2. Implement [`definitions::WhatsAppTool`] for a new unit struct
//! 3. Register it in [`build_tool_registry`]

pub mod definitions;
mod dispatcher;
mod envelope;
mod error;
mod handlers;
mod registry;

pub use definitions::build_tool_registry;
pub use dispatcher::{Dispatcher, InvocationFailure, InvocationOutcome, InvocationRequest};
pub use envelope::{FacadeEnvelope, ResponseEnvelope};
pub use error::ToolError;
pub use handlers::*;
pub use registry::{ToolDefinition, ToolRegistry};
