//! # Packup Command Modules
//!
//! File: cli/src/commands/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Top-level commands of the Packup CLI. Each module defines its own
//! argument struct and a `handle_*` function that `main.rs` dispatches to.
//!
//! - `build`: package the configured items into a timestamped ZIP (the default command)
//! - `list`: print the entries of an existing archive
//!

/// `packup build`: creates the submission archive.
pub mod build;
/// `packup list`: inspects an existing archive.
pub mod list;
