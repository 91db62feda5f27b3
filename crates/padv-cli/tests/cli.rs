//! Integration tests for the padv binary.

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn rename_missing_file_fails() {
    Command::cargo_bin("padv")
        .unwrap()
        .args(["rename", "does-not-exist.pdf", "--period", "P8"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn rename_non_pdf_extension_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("note.txt");
    std::fs::write(&path, b"hello").unwrap();

    Command::cargo_bin("padv")
        .unwrap()
        .args(["rename", path.to_str().unwrap(), "--period", "P8"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported file format"));
}

#[test]
fn rename_corrupt_pdf_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.pdf");
    std::fs::write(&path, b"definitely not a pdf").unwrap();

    Command::cargo_bin("padv")
        .unwrap()
        .args(["rename", path.to_str().unwrap(), "--period", "P8"])
        .assert()
        .failure();
}

#[test]
fn batch_empty_directory_fails() {
    let dir = tempfile::tempdir().unwrap();

    Command::cargo_bin("padv")
        .unwrap()
        .args(["batch", dir.path().to_str().unwrap(), "--period", "P8"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No PDF files found"));
}

#[test]
fn config_path_succeeds() {
    Command::cargo_bin("padv")
        .unwrap()
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration file"));
}
