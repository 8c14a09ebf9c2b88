//! # Packup ZIP Writer (`common::archive::writer`)
//!
//! File: cli/src/common/archive/writer.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! `ArchiveWriter` owns the output file for the duration of a build and
//! writes deflate-compressed entries into it using the `zip` crate.
//!
//! The writer is always finalized. `finish` does it explicitly and reports
//! errors; if the writer is dropped without reaching `finish` (for example
//! because `?` bailed out mid-walk), `Drop` writes the central directory for
//! whatever entries made it in and logs any failure. There is no cleanup of
//! the partial file and no atomic rename.
//!
//! Entries carry the source's modification time and, on Unix, its permission
//! bits. Entry names are passed in by the caller and must already use `/`
//! separators. Each name is written at most once: a repeated name is skipped
//! and reported back to the caller instead of failing the build.
//!
use crate::core::error::{PackupError, Result};
use anyhow::Context;
use chrono::{DateTime, Datelike, Local, Timelike};
use std::collections::HashSet;
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use tracing::{debug, warn};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

/// Entries at or above this size need ZIP64 extensions.
const ZIP64_THRESHOLD: u64 = 0xFFFF_FFFF;

/// A ZIP archive being written to disk.
pub struct ArchiveWriter {
    path: PathBuf,
    /// Canonical location of the output file, used to recognise it behind links.
    canonical: Option<PathBuf>,
    /// Names written so far; directory names carry their trailing `/`.
    entries: HashSet<String>,
    inner: Option<ZipWriter<File>>,
}

impl ArchiveWriter {
    /// Creates (or truncates) the archive file at `path`.
    ///
    /// # Errors
    ///
    /// Returns an `Err` wrapping the underlying `io::Error` if the file cannot
    /// be created, e.g. the directory is missing or not writable.
    pub fn create(path: &Path) -> Result<Self> {
        let file = File::create(path)
            .with_context(|| format!("Failed to create archive {}", path.display()))?;
        let canonical = fs::canonicalize(path).ok();
        debug!("Opened archive for writing: {}", path.display());
        Ok(Self {
            path: path.to_path_buf(),
            canonical,
            entries: HashSet::new(),
            inner: Some(ZipWriter::new(file)),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// True if `path` refers to the archive being written, whatever links lead to it.
    pub fn is_output(&self, path: &Path) -> bool {
        if path == self.path {
            return true;
        }
        match (&self.canonical, fs::canonicalize(path)) {
            (Some(output), Ok(candidate)) => *output == candidate,
            _ => false,
        }
    }

    /// Writes a directory entry named `entry_name` (a trailing `/` is added by the ZIP layer).
    ///
    /// Returns `false` without writing if the directory entry already exists.
    pub fn add_directory(&mut self, entry_name: &str, source: &Path) -> Result<bool> {
        let key = format!("{}/", entry_name);
        if self.entries.contains(&key) {
            debug!("Directory entry already present, skipping: {}", key);
            return Ok(false);
        }
        let metadata = fs::metadata(source)
            .with_context(|| format!("Failed to read metadata for {}", source.display()))?;
        let options = entry_options(&metadata);
        self.zip()?
            .add_directory(entry_name, options)
            .map_err(PackupError::from)
            .with_context(|| format!("Failed to add directory entry '{}'", entry_name))?;
        debug!("Added directory entry: {}", key);
        self.entries.insert(key);
        Ok(true)
    }

    /// Compresses the file at `source` into an entry named `entry_name`.
    ///
    /// Returns the number of bytes read from the source, or `None` without
    /// touching the source if an entry with that name was already written.
    pub fn add_file(&mut self, entry_name: &str, source: &Path) -> Result<Option<u64>> {
        if self.entries.contains(entry_name) {
            debug!("File entry already present, skipping: {}", entry_name);
            return Ok(None);
        }
        // Opened before the entry header is written so a vanished file fails cleanly.
        let mut source_file = File::open(source)
            .with_context(|| format!("Failed to open {} for archiving", source.display()))?;
        let metadata = source_file
            .metadata()
            .with_context(|| format!("Failed to read metadata for {}", source.display()))?;
        let options = entry_options(&metadata);

        let zip = self.zip()?;
        zip.start_file(entry_name, options)
            .map_err(PackupError::from)
            .with_context(|| format!("Failed to start archive entry '{}'", entry_name))?;
        let written = io::copy(&mut source_file, zip)
            .with_context(|| format!("Failed to write {} into the archive", source.display()))?;
        debug!("Added file entry: {} ({} bytes)", entry_name, written);
        self.entries.insert(entry_name.to_string());
        Ok(Some(written))
    }

    /// Writes the central directory and closes the file.
    pub fn finish(mut self) -> Result<PathBuf> {
        if let Some(zip) = self.inner.take() {
            zip.finish()
                .map_err(PackupError::from)
                .with_context(|| format!("Failed to finalize archive {}", self.path.display()))?;
        }
        debug!("Finalized archive: {}", self.path.display());
        Ok(std::mem::take(&mut self.path))
    }

    fn zip(&mut self) -> Result<&mut ZipWriter<File>> {
        self.inner.as_mut().ok_or_else(|| {
            anyhow::anyhow!(PackupError::FileSystem(format!(
                "Archive {} is already closed",
                self.path.display()
            )))
        })
    }
}

impl Drop for ArchiveWriter {
    fn drop(&mut self) {
        if let Some(zip) = self.inner.take() {
            debug!("Finalizing interrupted archive: {}", self.path.display());
            if let Err(e) = zip.finish() {
                warn!("Failed to finalize archive {}: {}", self.path.display(), e);
            }
        }
    }
}

fn entry_options(metadata: &fs::Metadata) -> SimpleFileOptions {
    let mut options = SimpleFileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .large_file(metadata.is_file() && metadata.len() >= ZIP64_THRESHOLD);
    if let Some(modified) = metadata.modified().ok().and_then(zip_timestamp) {
        options = options.last_modified_time(modified);
    }
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        options = options.unix_permissions(metadata.permissions().mode());
    }
    options
}

/// Converts to a ZIP (DOS) timestamp in local time; `None` outside 1980..=2107.
fn zip_timestamp(time: SystemTime) -> Option<zip::DateTime> {
    let local: DateTime<Local> = time.into();
    zip::DateTime::from_date_and_time(
        u16::try_from(local.year()).ok()?,
        local.month() as u8,
        local.day() as u8,
        local.hour() as u8,
        local.minute() as u8,
        local.second() as u8,
    )
    .ok()
}
