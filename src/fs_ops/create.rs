//! Directory tree creation.

use std::fs;
use std::path::Path;
use tracing::debug;

use crate::errors::RelocateError;

/// Create the directory at `path`, including any missing parents
/// ("mkdir -p"). An already existing directory chain is not an error.
pub fn create_dir_tree(path: &Path) -> Result<(), RelocateError> {
    fs::create_dir_all(path).map_err(|source| RelocateError::CreateDirTree {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), "Created directory tree");
    Ok(())
}
