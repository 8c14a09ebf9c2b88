//! # Packup Filesystem Utilities (`common::fs`)
//!
//! File: cli/src/common/fs/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Read-only filesystem helpers used by the archive builder:
//!
//! - **`resolve`**: classifies `base_dir/name` as missing, file, directory or other (follows symlinks).
//! - **`walk`**: pre-order, unsorted traversal of a directory tree using `walkdir`, handing each node to a visitor.
//!
//! Nothing in this module writes to disk; the only file Packup creates is the
//! archive, and that is owned by `common::archive::writer`.
//!

pub mod resolve;
pub mod walk;
