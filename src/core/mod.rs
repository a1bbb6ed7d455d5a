//! Core module containing shared infrastructure components.
//!
//! This module provides the foundational building blocks for the gateway,
//! including error handling, configuration, the shared server state,
//! media path checks and the HTTP transport.

pub mod config;
pub mod error;
pub mod security;
pub mod server;
pub mod transport;

pub use config::Config;
pub use error::{Error, Result};
pub use security::{MediaPathError, resolve_media_path};
pub use server::GatewayServer;
pub use transport::{HttpConfig, HttpTransport};
