//! # Packup Error Types
//!
//! File: cli/src/core/error.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module defines the error types used throughout Packup. Two layers
//! work together:
//! - `PackupError`: a `thiserror` enum for the failures Packup itself
//!   detects (bad configuration, unusable paths, ZIP writer failures).
//! - `Result<T>`: an alias for `anyhow::Result<T>` so call sites can attach
//!   context (usually the path involved) with `anyhow::Context`.
//!
//! Missing or wrong-kind submission items are *not* errors. The archive
//! builder records them as outcomes and keeps going. Only I/O failures
//! (the archive cannot be created or written, a source file cannot be read)
//! abort a build, and they keep the underlying `std::io::Error` in the
//! error chain.
//!
//! ## Examples
//!
//! ```rust
//! let file = fs::File::create(&archive_path)
//!     .with_context(|| format!("Failed to create archive {}", archive_path.display()))?;
//!
//! if prefix.is_empty() {
//!     anyhow::bail!(PackupError::Config("Archive prefix cannot be empty.".into()));
//! }
//! ```
//!
use thiserror::Error;

/// Custom error type for the Packup application.
#[derive(Error, Debug)]
pub enum PackupError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Filesystem error: {0}")]
    FileSystem(String),

    #[error("Archive write failed: {source}")]
    Archive {
        #[from]
        source: zip::result::ZipError,
    },

    #[error("Argument parsing error: {0}")]
    ArgumentParsing(String),
}

/// Type alias for Result using anyhow::Error for context-carrying propagation.
pub type Result<T> = anyhow::Result<T>;

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let config_err = PackupError::Config("Missing prefix".to_string());
        assert_eq!(config_err.to_string(), "Configuration error: Missing prefix");

        let fs_err = PackupError::FileSystem("'data' is not a directory".into());
        assert_eq!(
            fs_err.to_string(),
            "Filesystem error: 'data' is not a directory"
        );
    }

    #[test]
    fn test_zip_error_converts() {
        let zip_err = zip::result::ZipError::FileNotFound;
        let err: PackupError = zip_err.into();
        assert!(matches!(err, PackupError::Archive { .. }));
        assert!(err.to_string().starts_with("Archive write failed"));
    }
}
