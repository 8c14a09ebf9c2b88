//! # Packup UI Utilities Module (`common::ui`)
//!
//! File: cli/src/common/ui/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Terminal output helpers. Currently this is just the build report
//! (`report`): banners, per-item status lines, the size summary and the
//! submission checklist.
//!

pub mod report;
