//! WhatsApp domain module.
//!
//! The gateway never talks to WhatsApp itself. It forwards each operation to
//! a [`WhatsAppBackend`]; in production that is the [`BridgeClient`], in tests
//! any fake implementing the trait.
//!
//! - `params.rs` - typed parameters shared by tools, facades and the bridge
//! - `backend.rs` - the backend trait
//! - `bridge.rs` - REST client for the WhatsApp bridge
//! - `error.rs` - backend error types

mod backend;
mod bridge;
mod error;
mod params;

#[cfg(test)]
pub(crate) mod testing;

pub use backend::WhatsAppBackend;
pub use bridge::BridgeClient;
pub use error::{BackendError, BackendResult};
pub use params::*;
