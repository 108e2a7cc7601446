//! Single-file helpers: write, remove, read.

use std::fs;
use std::path::Path;
use tracing::{debug, info};

use crate::errors::RelocateError;

/// Write `contents` to `path`, creating the file or truncating an existing
/// one. Parent directories are not created.
pub fn create_file(path: &Path, contents: &str) -> Result<(), RelocateError> {
    fs::write(path, contents).map_err(|source| RelocateError::WriteFile {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), bytes = contents.len(), "Wrote file");
    Ok(())
}

/// Delete one file. Unlike [`remove_dir_tree`](super::remove_dir_tree) a
/// missing path is an error here.
pub fn remove_file(path: &Path) -> Result<(), RelocateError> {
    fs::remove_file(path).map_err(|source| RelocateError::RemoveFile {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), "Removed file");
    Ok(())
}

/// Read a file to a UTF-8 string.
pub fn read_file(path: &Path) -> Result<String, RelocateError> {
    let contents = fs::read_to_string(path).map_err(|source| RelocateError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = contents.len(), "Read file");
    Ok(contents)
}
