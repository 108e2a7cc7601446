//! Filesystem operations: modularized.

mod batch;
mod create;
mod file;
mod list;
mod remove;
mod single;

pub use batch::relocate_batch;
pub use create::create_dir_tree;
pub use file::{create_file, read_file, remove_file};
pub use list::{EntryKind, ListedEntry, list_dir};
pub use remove::remove_dir_tree;
pub use single::relocate_path;
