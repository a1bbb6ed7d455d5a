//! WhatsApp Tool Gateway Library
//!
//! This crate exposes WhatsApp MCP tools over plain HTTP: a generic
//! `POST /execute` endpoint that runs any registered tool by name, and a few
//! typed convenience routes for the most common operations.
//!
//! # Architecture
//!
//! - **core**: configuration, error handling, shared server state and the HTTP transport
//! - **domains**: business logic organized by bounded contexts
//!   - **tools**: tool registry, dispatcher and response envelopes
//!   - **whatsapp**: the messaging backend contract and its bridge client
//!
//! # Example
//!
//! ```rust,no_run
//! use whatsapp_tool_gateway::core::{Config, GatewayServer, HttpTransport};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = GatewayServer::new(config.clone())?;
//!     HttpTransport::new(config.transport).run(server).await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, GatewayServer, Result};
