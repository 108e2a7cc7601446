//! Batch semantics: ordered, fail-fast, destination is the target joined
//! with the source path as given. These tests pass relative sources, so each
//! one owns the process working directory for its duration.

use relocate::{RelocateError, relocate_batch};
use serial_test::serial;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

fn chdir(p: &Path) {
    std::env::set_current_dir(p).unwrap();
}

#[test]
#[serial]
fn moves_every_source_into_target() {
    let td = tempdir().unwrap();
    chdir(td.path());
    fs::write("f1.txt", "one").unwrap();
    fs::write("f2.txt", "two").unwrap();
    fs::create_dir("out").unwrap();

    relocate_batch(&[PathBuf::from("f1.txt"), "f2.txt".into()], Path::new("out")).unwrap();

    assert!(!Path::new("f1.txt").exists());
    assert_eq!(fs::read_to_string("out/f1.txt").unwrap(), "one");
    assert_eq!(fs::read_to_string("out/f2.txt").unwrap(), "two");
}

#[test]
#[serial]
fn stops_at_first_failure_keeping_earlier_moves() {
    let td = tempdir().unwrap();
    chdir(td.path());
    fs::write("f1.txt", "one").unwrap();
    fs::write("f2.txt", "two").unwrap();
    // f3.txt deliberately absent; f4 exists but must stay untouched.
    fs::write("f4.txt", "four").unwrap();
    fs::create_dir("out").unwrap();

    let sources = [
        PathBuf::from("f1.txt"),
        "f2.txt".into(),
        "f3.txt".into(),
        "f4.txt".into(),
    ];
    let err = relocate_batch(&sources, Path::new("out")).unwrap_err();

    // Failure names the offending source.
    assert_eq!(err.path(), Path::new("f3.txt"));
    assert!(matches!(err, RelocateError::Relocate { .. }));

    // Earlier sources moved, later sources untouched, nothing rolled back.
    assert!(Path::new("out/f1.txt").exists());
    assert!(Path::new("out/f2.txt").exists());
    assert!(!Path::new("out/f3.txt").exists());
    assert!(Path::new("f4.txt").exists());
    assert!(!Path::new("out/f4.txt").exists());
}

#[test]
#[serial]
fn nested_source_keeps_its_directory_components() {
    let td = tempdir().unwrap();
    chdir(td.path());
    fs::create_dir("sub").unwrap();
    fs::write("sub/file.txt", "nested").unwrap();
    fs::create_dir("out").unwrap();

    // The destination is out/sub/file.txt, so the move fails while out/sub
    // does not exist...
    let err = relocate_batch(&[PathBuf::from("sub/file.txt")], Path::new("out")).unwrap_err();
    assert_eq!(err.path(), Path::new("sub/file.txt"));
    assert!(Path::new("sub/file.txt").exists());

    // ...and succeeds once it does.
    fs::create_dir("out/sub").unwrap();
    relocate_batch(&[PathBuf::from("sub/file.txt")], Path::new("out")).unwrap();
    assert_eq!(fs::read_to_string("out/sub/file.txt").unwrap(), "nested");
}

#[test]
#[serial]
fn empty_batch_is_a_no_op() {
    let td = tempdir().unwrap();
    chdir(td.path());
    fs::create_dir("out").unwrap();
    let sources: [PathBuf; 0] = [];
    relocate_batch(&sources, Path::new("out")).unwrap();
}
