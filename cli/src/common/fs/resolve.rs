//! # Packup Item Resolution (`common::fs::resolve`)
//!
//! File: cli/src/common/fs/resolve.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Classifies what sits at `base_dir/name` before the builder decides how to
//! archive it. Symbolic links are followed, so a link to a file resolves as a
//! file and a link to a directory resolves as a directory.
//!
//! A path that does not exist is reported as `Resolved::Missing` rather than
//! an error. This also covers a base directory that does not exist at all.
//! Any other failure while inspecting the path (for example a permission
//! error on a parent directory) is returned as an error.
//!
use crate::core::error::Result;
use anyhow::Context;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::debug;

/// What a candidate path turned out to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolved {
    Missing,
    File { size: u64 },
    Directory,
    /// Exists, but is neither a regular file nor a directory (FIFO, socket, device).
    Other,
}

/// Inspects `path`, following symlinks.
pub fn resolve(path: &Path) -> Result<Resolved> {
    let metadata = match fs::metadata(path) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!("Not found: {}", path.display());
            return Ok(Resolved::Missing);
        }
        Err(e) => {
            return Err(e).with_context(|| format!("Failed to inspect {}", path.display()));
        }
    };

    let resolved = if metadata.is_file() {
        Resolved::File {
            size: metadata.len(),
        }
    } else if metadata.is_dir() {
        Resolved::Directory
    } else {
        Resolved::Other
    };
    debug!("Resolved {} as {:?}", path.display(), resolved);
    Ok(resolved)
}
