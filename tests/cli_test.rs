//! Exit status of the `scansplit` binary

mod common;

use std::path::Path;
use std::process::{Command, Output};

use common::*;

fn run_scansplit(dir: &Path, input: &Path, extra: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_scansplit"))
        .arg(input)
        .arg("--output-dir").arg(dir.join("out"))
        .arg("--batch").arg("3")
        .arg("--log-file").arg(dir.join("scansplit.log"))
        .arg("--record-file").arg(dir.join("runs.log"))
        .args(extra)
        .output()
        .unwrap()
}

#[test]
fn test_unsupported_format_exits_non_zero() {
    let dir = tempfile::tempdir().unwrap();
    let input = save_scan(dir.path(), "scan.bmp", &draw_scan(60, 40, &[]));

    let output = run_scansplit(dir.path(), &input, &[]);

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Unsupported"));
    assert!(!dir.path().join("out").exists());
}

#[test]
fn test_blank_scan_exits_zero() {
    let dir = tempfile::tempdir().unwrap();
    let input = save_scan(dir.path(), "scan.png", &draw_scan(200, 150, &[]));

    let output = run_scansplit(dir.path(), &input, &["--count", "4"]);

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    assert!(dir.path().join("out").join("instax_parsing").join("3").is_dir());
}

#[test]
fn test_namespace_outside_output_dir_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let input = save_scan(dir.path(), "scan.png", &draw_scan(200, 150, &[]));

    let output = run_scansplit(dir.path(), &input, &["--namespace", "../x"]);

    assert!(!output.status.success());
    assert!(!dir.path().join("x").exists());
}
