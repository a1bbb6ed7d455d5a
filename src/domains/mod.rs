//! Domains module containing business logic organized by bounded contexts.
//!
//! - **tools**: the registry, dispatcher and envelopes behind `/execute`
//! - **whatsapp**: the messaging operations the tools and facades forward to

pub mod tools;
pub mod whatsapp;
