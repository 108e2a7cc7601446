//! Analyzer demo through the binary, driven by a throwaway shell script in
//! place of the real analysis program.

#![cfg(unix)]

use std::fs;
use std::process::Command;
use tempfile::tempdir;

#[test]
fn analyze_prints_the_script_output() {
    let td = tempdir().unwrap();
    let data = td.path().join("sample.txt");
    fs::write(&data, "sixteen bytes!!\n").unwrap();
    let script = td.path().join("analyze.sh");
    fs::write(&script, "echo \"analyzed: $1\"\nwc -c < \"$1\"\n").unwrap();

    let me = assert_cmd::cargo::cargo_bin!("relocate");
    let out = Command::new(me)
        .arg("--log-level")
        .arg("quiet")
        .arg("analyze")
        .arg(&data)
        .args(["--program", "sh"])
        .arg("--script")
        .arg(&script)
        .output()
        .expect("spawn binary");

    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("analyzed:"), "stdout: {stdout}");
    assert!(stdout.contains("16"), "stdout: {stdout}");
}

#[test]
fn failing_analyzer_still_shows_partial_output() {
    let td = tempdir().unwrap();
    let data = td.path().join("sample.txt");
    fs::write(&data, "data").unwrap();
    let script = td.path().join("analyze.sh");
    fs::write(&script, "echo partial-result\nexit 2\n").unwrap();

    let me = assert_cmd::cargo::cargo_bin!("relocate");
    let out = Command::new(me)
        .arg("--log-level")
        .arg("quiet")
        .arg("analyze")
        .arg(&data)
        .args(["--program", "sh"])
        .arg("--script")
        .arg(&script)
        .output()
        .expect("spawn binary");

    // Graceful exit even on analyzer failure.
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("partial-result"), "stdout: {stdout}");
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("error:"), "stderr: {stderr}");
    assert!(stderr.contains("exited with"), "stderr: {stderr}");
}
