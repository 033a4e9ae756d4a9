//! Integration tests for corrupt store handling
//!
//! A store file that exists but does not match the expected schema must be
//! surfaced as an error, never silently treated as an empty journal.

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

mod common;
use common::journalyze_cmd;

fn init_journal(temp: &TempDir) {
    journalyze_cmd().arg("init").arg(temp.path()).assert().success();
}

#[test]
fn test_missing_content_column_is_corrupt() {
    let temp = TempDir::new().unwrap();
    init_journal(&temp);

    fs::write(
        temp.path().join("journals.csv"),
        "date,title\n2025-01-17,Morning\n",
    )
    .unwrap();

    journalyze_cmd()
        .current_dir(temp.path())
        .arg("list")
        .assert()
        .failure()
        .code(5)
        .stderr(predicate::str::contains("Corrupt journal store"))
        .stderr(predicate::str::contains("date,title,content"));
}

#[test]
fn test_unparsable_row_is_corrupt() {
    let temp = TempDir::new().unwrap();
    init_journal(&temp);

    fs::write(
        temp.path().join("journals.csv"),
        "date,title,content\nnot-a-date,Morning,coffee\n",
    )
    .unwrap();

    journalyze_cmd()
        .current_dir(temp.path())
        .arg("list")
        .assert()
        .failure()
        .code(5)
        .stderr(predicate::str::contains("Corrupt journal store"));
}

#[test]
fn test_corrupt_store_blocks_append() {
    let temp = TempDir::new().unwrap();
    init_journal(&temp);

    let original = "date,title\n2025-01-17,Morning\n";
    fs::write(temp.path().join("journals.csv"), original).unwrap();

    journalyze_cmd()
        .current_dir(temp.path())
        .args(["add", "New", "entry"])
        .assert()
        .failure()
        .code(5);

    // The corrupt file is left untouched for the user to inspect
    let after = fs::read_to_string(temp.path().join("journals.csv")).unwrap();
    assert_eq!(after, original);
}

#[test]
fn test_empty_store_file_is_corrupt() {
    let temp = TempDir::new().unwrap();
    init_journal(&temp);

    fs::write(temp.path().join("journals.csv"), "").unwrap();

    journalyze_cmd()
        .current_dir(temp.path())
        .arg("list")
        .assert()
        .failure()
        .code(5)
        .stderr(predicate::str::contains("Corrupt journal store"));
}

#[test]
fn test_analysis_commands_surface_corruption() {
    let temp = TempDir::new().unwrap();
    init_journal(&temp);

    fs::write(temp.path().join("journals.csv"), "wrong,header,here\n").unwrap();

    journalyze_cmd()
        .current_dir(temp.path())
        .args(["sentiment", "1"])
        .assert()
        .failure()
        .code(5);

    journalyze_cmd()
        .current_dir(temp.path())
        .args(["keywords", "1"])
        .assert()
        .failure()
        .code(5);
}
