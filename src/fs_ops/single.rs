//! Single-path relocation.
//! A pure rename: atomic to the extent the host filesystem guarantees, and
//! deliberately without a copy+remove fallback, so a cross-device move fails
//! the way the rename primitive fails.

use std::fs;
use std::path::Path;
use tracing::info;

use crate::errors::RelocateError;

/// Rename `from` to `to`. Works for files and directories.
///
/// Fails when `from` does not exist, the parent of `to` does not exist, or
/// the host refuses the rename (permissions, cross-device link).
pub fn relocate_path(from: &Path, to: &Path) -> Result<(), RelocateError> {
    fs::rename(from, to).map_err(|source| RelocateError::Relocate {
        from: from.to_path_buf(),
        to: to.to_path_buf(),
        source,
    })?;
    info!(from = %from.display(), to = %to.display(), "Relocated");
    Ok(())
}
