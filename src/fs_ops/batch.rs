//! Batch relocation: move an ordered list of paths into one target
//! directory, halting on the first failure.

use std::path::{Path, PathBuf};
use tracing::debug;

use crate::errors::RelocateError;

use super::single::relocate_path;

/// Move every path in `sources`, in order, into `target_dir`.
///
/// The destination for each source is `target_dir` joined with the source's
/// full path value, not just its final component: moving `sub/file.txt` into
/// `out` targets `out/sub/file.txt` and requires `out/sub` to already exist.
/// An absolute source follows platform join semantics and replaces the
/// target entirely, so it renames onto itself.
///
/// Fails fast. The first rename that fails stops the batch and surfaces that
/// failure (its `from` field names the offending source); sources before it
/// stay moved, sources after it stay untouched, and nothing is rolled back.
pub fn relocate_batch<P: AsRef<Path>>(sources: &[P], target_dir: &Path) -> Result<(), RelocateError> {
    for source in sources {
        let source = source.as_ref();
        let dest = batch_destination(target_dir, source);
        debug!(source = %source.display(), dest = %dest.display(), "Batch step");
        relocate_path(source, &dest)?;
    }
    Ok(())
}

/// Destination rule for one batch entry: the target joined with the whole
/// source path.
fn batch_destination(target_dir: &Path, source: &Path) -> PathBuf {
    target_dir.join(source)
}
