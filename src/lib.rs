//! Core library for `relocate`.
//!
//! Small filesystem helpers: create a directory tree, delete one, move a
//! single path, and move a batch of paths into a target directory. Every
//! operation is a thin, blocking delegation to the host filesystem; nothing
//! is retained between calls. The `analyzer` module adds one capability on
//! top: run an external analysis program against a file and capture its
//! console output.

pub mod analyzer;
pub mod errors;
pub mod fs_ops;
pub mod output;

pub use analyzer::{Analyzer, ScriptAnalyzer};
pub use errors::{AnalyzerError, RelocateError};
pub use fs_ops::{
    EntryKind, ListedEntry, create_dir_tree, create_file, list_dir, read_file, relocate_batch,
    relocate_path, remove_dir_tree, remove_file,
};
