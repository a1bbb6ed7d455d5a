use std::io;
use std::path::{Path, PathBuf};

use crate::core::config::SecurityConfig;

/// Errors raised while checking a file that is about to be sent.
#[derive(Debug, thiserror::Error)]
pub enum MediaPathError {
    #[error("Media file not found: '{path}'")]
    NotFound { path: PathBuf },

    #[error("Media path is not a regular file: '{path}'")]
    NotAFile { path: PathBuf },

    #[error("Media path '{path}' is outside allowed root directory '{root}'")]
    OutsideRoot { path: PathBuf, root: PathBuf },

    #[error("Media path '{path}' is a symlink and symlinks are not allowed")]
    SymlinkRefused { path: PathBuf },

    #[error("IO error for path '{path}': {error}")]
    Io { path: PathBuf, error: io::Error },
}

/// Resolve a caller-supplied media path to a canonical file path.
///
/// The path must exist and point at a regular file. With a configured
/// `media_root` the canonical path (symlinks resolved) must lie inside it;
/// with `allow_symlinks` off a symlink is refused outright.
pub fn resolve_media_path(
    input_path: &str,
    security: &SecurityConfig,
) -> Result<PathBuf, MediaPathError> {
    let path = Path::new(input_path);

    let link_meta = path.symlink_metadata().map_err(|e| io_error(path, e))?;
    if link_meta.file_type().is_symlink() && !security.allow_symlinks {
        return Err(MediaPathError::SymlinkRefused {
            path: path.to_path_buf(),
        });
    }

    let canonical = path.canonicalize().map_err(|e| io_error(path, e))?;
    if !canonical.is_file() {
        return Err(MediaPathError::NotAFile { path: canonical });
    }

    if let Some(root) = &security.media_root {
        let canonical_root = root.canonicalize().map_err(|e| MediaPathError::Io {
            path: root.clone(),
            error: e,
        })?;
        if !canonical.starts_with(&canonical_root) {
            return Err(MediaPathError::OutsideRoot {
                path: canonical,
                root: canonical_root,
            });
        }
    }

    Ok(canonical)
}

fn io_error(path: &Path, error: io::Error) -> MediaPathError {
    if error.kind() == io::ErrorKind::NotFound {
        MediaPathError::NotFound {
            path: path.to_path_buf(),
        }
    } else {
        MediaPathError::Io {
            path: path.to_path_buf(),
            error,
        }
    }
}
