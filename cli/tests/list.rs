//! # Packup CLI List Integration Tests
//!
//! File: cli/tests/list.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Builds an archive with `packup build`, then inspects it with `packup list`.
//!

mod common;
use common::*;
use predicates::prelude::*;
use std::fs;

#[test]
fn test_list_shows_built_entries() {
    let dir = submission_dir();
    packup_cmd_in(dir.path())
        .args(["build", "-r", "README.md", "-r", "8samples", "--no-checklist"])
        .assert()
        .success();
    let zips = zip_files_in(dir.path());

    packup_cmd_in(dir.path())
        .arg("list")
        .arg(&zips[0])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("8samples/a.obj")
                .and(predicate::str::contains("README.md"))
                .and(predicate::str::contains("3 file(s), 1 folder(s), 136 bytes uncompressed.")),
        );
}

#[test]
fn test_list_missing_archive_fails() {
    let dir = submission_dir();

    packup_cmd_in(dir.path())
        .args(["list", "nothing.zip"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_list_non_zip_fails() {
    let dir = submission_dir();
    fs::write(dir.path().join("fake.zip"), "plain text").unwrap();

    packup_cmd_in(dir.path())
        .args(["list", "fake.zip"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a readable ZIP archive"));
}
