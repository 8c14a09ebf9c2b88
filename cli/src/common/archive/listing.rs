//! # Packup Archive Listing (`common::archive::listing`)
//!
//! File: cli/src/common/archive/listing.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Reads the central directory of an existing ZIP archive and returns its
//! entries in archive order. Used by `packup list` to check what went into a
//! submission without extracting it. Entry contents are not decompressed and
//! checksums are not recomputed.
//!
use crate::core::error::{PackupError, Result};
use anyhow::Context;
use std::fs::File;
use std::path::Path;
use zip::ZipArchive;

/// One entry as recorded in the archive's central directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListedEntry {
    pub name: String,
    pub is_dir: bool,
    pub size: u64,
    pub compressed_size: u64,
}

/// Lists every entry of the ZIP archive at `path`.
///
/// # Errors
///
/// Returns an `Err` if the file cannot be opened or is not a readable ZIP archive.
pub fn list_entries(path: &Path) -> Result<Vec<ListedEntry>> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open archive {}", path.display()))?;
    let mut archive = ZipArchive::new(file)
        .map_err(PackupError::from)
        .with_context(|| format!("{} is not a readable ZIP archive", path.display()))?;

    let mut entries = Vec::with_capacity(archive.len());
    for index in 0..archive.len() {
        let entry = archive
            .by_index_raw(index)
            .map_err(PackupError::from)
            .with_context(|| format!("Failed to read entry {} of {}", index, path.display()))?;
        entries.push(ListedEntry {
            name: entry.name().to_string(),
            is_dir: entry.is_dir(),
            size: entry.size(),
            compressed_size: entry.compressed_size(),
        });
    }
    Ok(entries)
}
