//! # Packup CLI Main Integration Tests
//!
//! File: cli/tests/main_tests.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Top-level behavior of the `packup` binary: standard flags and argument errors.
//!

mod common;
use common::*;
use predicates::prelude::*;

#[test]
fn test_help_flag() {
    packup_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("build").and(predicate::str::contains("list")));
}

#[test]
fn test_version_flag() {
    packup_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_unknown_subcommand_fails() {
    packup_cmd().arg("unpack").assert().failure();
}
