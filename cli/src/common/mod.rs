//! # Packup Common Utilities (`common`)
//!
//! File: cli/src/common/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Shared utilities used by the command handlers, kept separate from
//! command-specific logic (`commands::`) and core infrastructure (`core::`).
//!
//! - **`archive`**: item model, ZIP writer, archive builder and listing.
//! - **`fs`**: item resolution and directory traversal.
//! - **`ui`**: rendering of the human-readable build report.
//!
//! ```rust
//! use crate::common::{archive, fs, ui};
//!
//! let kind = fs::resolve::resolve(&base_dir.join("README.md"))?;
//! let entries = archive::listing::list_entries(&zip_path)?;
//! println!("{}", ui::report::thousands(1_234));
//! ```
//!

/// ZIP archive creation and inspection.
pub mod archive;
/// Read-only filesystem helpers (resolution, traversal).
pub mod fs;
/// Terminal output for build reports.
pub mod ui;
