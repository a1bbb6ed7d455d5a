//! Transport layer for the gateway.
//!
//! The gateway is served over HTTP only:
//! - `http.rs` - listener, generic routes (`/health`, `/tools`, `/execute`)
//! - `facades.rs` - typed convenience routes under `/whatsapp`
//! - `config.rs` - bind address and CORS settings
//! - `error.rs` - transport error types

mod config;
mod error;
mod facades;
pub mod http;

pub use config::HttpConfig;
pub use error::{TransportError, TransportResult};
pub use http::{ApiError, HealthResponse, HttpTransport, build_router};
