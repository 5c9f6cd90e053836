use assert_fs::prelude::*;
use predicates::prelude::*;
use sbtkit_fs::{NormalizedPath, WriteOutcome, io};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_write_atomic_creates_parent_dirs() {
    let temp = TempDir::new().unwrap();
    let path = NormalizedPath::new(temp.path().join("project/project/metals.sbt"));

    io::write_atomic(&path, b"addSbtPlugin").unwrap();

    let content = fs::read_to_string(path.to_native()).unwrap();
    assert_eq!(content, "addSbtPlugin");
}

#[test]
fn test_write_atomic_overwrites_existing() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("metals.sbt");
    fs::write(&file_path, "original").unwrap();

    io::write_atomic(&NormalizedPath::new(&file_path), b"updated").unwrap();

    assert_eq!(fs::read_to_string(&file_path).unwrap(), "updated");
}

#[test]
fn test_write_if_changed_reports_created_then_unchanged() {
    let temp = assert_fs::TempDir::new().unwrap();
    let path = NormalizedPath::new(temp.path().join("metals.sbt"));

    let first = io::write_if_changed(&path, b"v1").unwrap();
    let second = io::write_if_changed(&path, b"v1").unwrap();

    assert_eq!(first, WriteOutcome::Created);
    assert_eq!(second, WriteOutcome::Unchanged);
    temp.child("metals.sbt").assert("v1");
}

#[test]
fn test_write_if_changed_updates_different_content() {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child("metals.sbt").write_str("stale").unwrap();
    let path = NormalizedPath::new(temp.path().join("metals.sbt"));

    let outcome = io::write_if_changed(&path, b"fresh").unwrap();

    assert_eq!(outcome, WriteOutcome::Updated);
    temp.child("metals.sbt").assert("fresh");
}

#[test]
fn test_write_if_changed_does_not_touch_identical_file() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("metals.sbt");
    fs::write(&file_path, "same").unwrap();
    let before = fs::metadata(&file_path).unwrap().modified().unwrap();

    std::thread::sleep(std::time::Duration::from_millis(20));
    let outcome = io::write_if_changed(&NormalizedPath::new(&file_path), b"same").unwrap();

    let after = fs::metadata(&file_path).unwrap().modified().unwrap();
    assert_eq!(outcome, WriteOutcome::Unchanged);
    assert_eq!(before, after);
}

#[test]
fn test_write_if_absent_never_overwrites() {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child("project/Bridge.scala").write_str("old bridge").unwrap();
    let path = NormalizedPath::new(temp.path().join("project/Bridge.scala"));

    let outcome = io::write_if_absent(&path, b"new bridge").unwrap();

    assert_eq!(outcome, WriteOutcome::Unchanged);
    temp.child("project/Bridge.scala")
        .assert(predicate::str::contains("old bridge"));
}

#[test]
fn test_write_if_absent_creates_missing_file() {
    let temp = assert_fs::TempDir::new().unwrap();
    let path = NormalizedPath::new(temp.path().join("project/Bridge.scala"));

    let outcome = io::write_if_absent(&path, b"bridge").unwrap();

    assert_eq!(outcome, WriteOutcome::Created);
    temp.child("project/Bridge.scala").assert(predicate::path::is_file());
}

#[test]
fn test_remove_file_best_effort() {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child("metals.sbt").touch().unwrap();
    let path = NormalizedPath::new(temp.path().join("metals.sbt"));

    assert!(io::remove_file_best_effort(&path, "test"));
    assert!(!io::remove_file_best_effort(&path, "test"));
    temp.child("metals.sbt").assert(predicate::path::missing());
}

#[test]
fn test_read_text_nonexistent_file() {
    let path = NormalizedPath::new("/nonexistent/build.properties");
    let err = io::read_text(&path).unwrap_err();
    assert!(err.is_not_found());
}
