//! Recursive directory removal.

use std::fs;
use std::io;
use std::path::Path;
use tracing::{debug, info};

use crate::errors::RelocateError;

/// Remove the directory at `path` and everything beneath it.
///
/// A missing path is success (idempotent delete). On failure partway through
/// the walk, whatever was already removed stays removed; there is no
/// rollback.
pub fn remove_dir_tree(path: &Path) -> Result<(), RelocateError> {
    match fs::remove_dir_all(path) {
        Ok(()) => {
            info!(path = %path.display(), "Removed directory tree");
            Ok(())
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "Directory tree already absent");
            Ok(())
        }
        Err(source) => Err(RelocateError::RemoveDirTree {
            path: path.to_path_buf(),
            source,
        }),
    }
}
