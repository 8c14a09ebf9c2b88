//! # Packup CLI Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Shared helpers for the integration tests in `cli/tests/`. Each test file
//! declares `mod common;` and runs the compiled `packup` binary inside a
//! temporary submission directory.
//!

// Different test files use different helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// # Get Packup Command (`packup_cmd`)
///
/// An `assert_cmd::Command` for the compiled `packup` binary.
///
/// ## Panics
/// Panics if the binary cannot be found via `Command::cargo_bin`.
pub fn packup_cmd() -> Command {
    Command::cargo_bin("packup").expect("Failed to find packup binary for testing")
}

/// `packup_cmd` running in `dir`, isolated from the user's own configuration.
pub fn packup_cmd_in(dir: &Path) -> Command {
    let mut cmd = packup_cmd();
    cmd.current_dir(dir)
        .env("XDG_CONFIG_HOME", dir.join(".xdg-config"))
        .env_remove("PACKUP_CONFIG")
        .env_remove("RUST_LOG");
    cmd
}

/// A submission directory with `README.md` (120 bytes) and `8samples/{a,b}.obj`.
///
/// Contains a `.git` directory so the project config search stops here.
pub fn submission_dir() -> TempDir {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let base = temp_dir.path();
    fs::create_dir(base.join(".git")).unwrap();
    fs::write(base.join("README.md"), vec![b'#'; 120]).unwrap();
    fs::create_dir(base.join("8samples")).unwrap();
    fs::write(base.join("8samples/a.obj"), "v 0 0 0\n").unwrap();
    fs::write(base.join("8samples/b.obj"), "v 1 1 1\n").unwrap();
    temp_dir
}

/// Every `.zip` file directly inside `dir`.
pub fn zip_files_in(dir: &Path) -> Vec<PathBuf> {
    fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().path())
        .filter(|p| p.extension().is_some_and(|ext| ext == "zip"))
        .collect()
}

/// Entry names of the archive at `path`, in archive order.
pub fn entry_names(path: &Path) -> Vec<String> {
    let mut archive = zip::ZipArchive::new(File::open(path).unwrap()).unwrap();
    (0..archive.len())
        .map(|i| archive.by_index(i).unwrap().name().to_string())
        .collect()
}
