//! Typed error definitions for relocate.
//! Every filesystem failure is an I/O error annotated with the operation and
//! the path(s) it failed on; the host `io::Error` stays reachable as the
//! source for callers that need the exact cause.

use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitStatus;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RelocateError {
    #[error("Failed to create directory tree '{}': {source}", path.display())]
    CreateDirTree {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to remove directory tree '{}': {source}", path.display())]
    RemoveDirTree {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to relocate '{}' -> '{}': {source}", from.display(), to.display())]
    Relocate {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write file '{}': {source}", path.display())]
    WriteFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to remove file '{}': {source}", path.display())]
    RemoveFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to read file '{}': {source}", path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to list directory '{}': {source}", path.display())]
    ListDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl RelocateError {
    /// The path the operation failed on. For a relocation this is the source
    /// path, which is also how a batch reports which entry stopped it.
    pub fn path(&self) -> &Path {
        match self {
            RelocateError::CreateDirTree { path, .. }
            | RelocateError::RemoveDirTree { path, .. }
            | RelocateError::WriteFile { path, .. }
            | RelocateError::RemoveFile { path, .. }
            | RelocateError::ReadFile { path, .. }
            | RelocateError::ListDir { path, .. } => path,
            RelocateError::Relocate { from, .. } => from,
        }
    }

    /// Kind of the underlying host error, for callers that discriminate
    /// between permission, missing-path and other I/O causes.
    pub fn io_kind(&self) -> io::ErrorKind {
        match self {
            RelocateError::CreateDirTree { source, .. }
            | RelocateError::RemoveDirTree { source, .. }
            | RelocateError::Relocate { source, .. }
            | RelocateError::WriteFile { source, .. }
            | RelocateError::RemoveFile { source, .. }
            | RelocateError::ReadFile { source, .. }
            | RelocateError::ListDir { source, .. } => source.kind(),
        }
    }
}

/// Failures from the external analyzer capability.
#[derive(Debug, Error)]
pub enum AnalyzerError {
    #[error("Failed to launch analyzer '{program}': {source}")]
    Launch {
        program: String,
        #[source]
        source: io::Error,
    },

    /// The analyzer ran but exited non-zero. The transcript captured up to
    /// that point is kept so callers can still show what it printed.
    #[error("Analyzer '{program}' exited with {status}")]
    Exited {
        program: String,
        status: ExitStatus,
        transcript: String,
    },
}
