// Security module for media path validation
//
// Files sent through the gateway are read by the messaging bridge from the
// local filesystem, so their paths are checked against the configured media
// root before anything is forwarded.

pub mod media_path;

pub use media_path::{MediaPathError, resolve_media_path};
