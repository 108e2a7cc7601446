//! One-level directory listing.

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::errors::RelocateError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum EntryKind {
    Directory,
    File,
    /// Symlinks, pipes, sockets and other non-regular entries.
    Other,
}

/// One entry of a directory listing.
#[derive(Debug, Clone)]
pub struct ListedEntry {
    /// Final path component. Kept as an `OsString` so non-UTF8 names survive.
    pub name: OsString,
    pub path: PathBuf,
    pub kind: EntryKind,
    /// File size in bytes; `None` for directories and entries whose metadata
    /// could not be read.
    pub size: Option<u64>,
}

/// List the entries directly under `path`, directories first, each group
/// sorted by name. Not recursive.
pub fn list_dir(path: &Path) -> Result<Vec<ListedEntry>, RelocateError> {
    let read_err = |source| RelocateError::ListDir {
        path: path.to_path_buf(),
        source,
    };

    let mut entries = Vec::new();
    for entry in fs::read_dir(path).map_err(read_err)? {
        let entry = entry.map_err(read_err)?;
        let file_type = entry.file_type().map_err(read_err)?;
        let kind = if file_type.is_dir() {
            EntryKind::Directory
        } else if file_type.is_file() {
            EntryKind::File
        } else {
            EntryKind::Other
        };
        let size = match kind {
            EntryKind::Directory => None,
            _ => entry.metadata().ok().map(|m| m.len()),
        };
        entries.push(ListedEntry {
            name: entry.file_name(),
            path: entry.path(),
            kind,
            size,
        });
    }

    entries.sort_by(|a, b| (a.kind, &a.name).cmp(&(b.kind, &b.name)));
    debug!(path = %path.display(), count = entries.len(), "Listed directory");
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn directories_sort_before_files() {
        let td = tempdir().unwrap();
        fs::write(td.path().join("a.txt"), b"aa").unwrap();
        fs::create_dir(td.path().join("zdir")).unwrap();
        fs::write(td.path().join("b.txt"), b"b").unwrap();

        let entries = list_dir(td.path()).unwrap();
        let names: Vec<_> = entries
            .iter()
            .map(|e| e.name.to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, ["zdir", "a.txt", "b.txt"]);
        assert_eq!(entries[0].kind, EntryKind::Directory);
        assert_eq!(entries[0].size, None);
        assert_eq!(entries[1].size, Some(2));
    }

    #[test]
    fn missing_directory_errors() {
        let td = tempdir().unwrap();
        let err = list_dir(&td.path().join("nope")).unwrap_err();
        assert!(matches!(err, RelocateError::ListDir { .. }));
    }
}
