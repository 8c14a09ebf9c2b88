//! # Packup Core Infrastructure
//!
//! File: cli/src/core/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Foundational pieces shared by every command:
//! - `clock`: the injectable time source used to name archives
//! - `config`: configuration loading, merging, and validation
//! - `error`: error types and the crate-wide `Result` alias
//!
//! ```rust
//! use crate::core::clock::SystemClock;
//! use crate::core::config;
//! use crate::core::error::{PackupError, Result};
//! ```
//!
pub mod clock;
pub mod config;
pub mod error;
