//! # Packup Archive Builder (`common::archive::builder`)
//!
//! File: cli/src/common/archive/builder.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Packages the configured submission items from a base directory into one
//! timestamped ZIP archive placed inside that directory.
//!
//! ## Architecture
//!
//! A build is a single linear pass:
//! 1. Name the archive `<prefix>_<YYYYMMDD_HHMMSS>.zip` using the injected clock.
//! 2. Open an `ArchiveWriter` on `base_dir/<name>`.
//! 3. Resolve each item in declaration order and dispatch on its kind:
//!    - required file: one entry
//!    - required directory: one directory entry per directory node (root
//!      included) and one file entry per file, walked pre-order
//!    - optional file: one entry
//!    - anything else: recorded as `NotFound` (required) or `Skipped` (optional)
//!
//!    Each outcome is handed to the caller's callback before the next item
//!    is resolved.
//! 4. Finalize the archive and return a `BuildReport`.
//!
//! Every entry name is the source path relative to `base_dir`, joined with
//! `/`. Items that overlap (a file inside a required directory, or `./x`
//! next to `x`) produce each entry once; later repeats are skipped and not
//! counted. The archive itself is never added, even when a link leads back
//! to it. Missing items never fail the build; I/O errors always do, and the
//! writer's `Drop` still finalizes whatever was written before the error.
//!
//! ## Usage
//!
//! ```rust
//! use crate::common::archive::builder::build_archive;
//! use crate::common::archive::item::ItemSpec;
//! use crate::core::clock::SystemClock;
//!
//! let items = ItemSpec::from_lists(["README.md", "8samples"], ["requirements.txt"]);
//! let report = build_archive(base_dir, "Submission", &items, &SystemClock)?;
//! println!("{} files -> {}", report.files_added, report.archive_path.display());
//! ```
//!
use super::item::{ItemKind, ItemOutcome, ItemSpec};
use super::writer::ArchiveWriter;
use crate::common::fs::resolve::{resolve, Resolved};
use crate::common::fs::walk::{walk_tree, NodeKind};
use crate::core::clock::{archive_file_name, Clock};
use crate::core::error::{PackupError, Result};
use anyhow::anyhow;
use std::path::{Component, Path, PathBuf};
use tracing::{debug, info, warn};

/// Result of a successful build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildReport {
    pub archive_path: PathBuf,
    /// Distinct file entries written; directory entries are not counted.
    pub files_added: usize,
    /// One outcome per attempted item, in declaration order.
    pub outcomes: Vec<ItemOutcome>,
}

/// Builds the submission archive for `items` inside `base_dir`.
///
/// ## Errors
///
/// Returns an `Err` if the archive cannot be created or written, or if a
/// source file or directory cannot be read while it is being archived. The
/// partially written archive is left in place.
pub fn build_archive(
    base_dir: &Path,
    prefix: &str,
    items: &[ItemSpec],
    clock: &dyn Clock,
) -> Result<BuildReport> {
    build_archive_with(base_dir, prefix, items, clock, |_, _| {})
}

/// Like [`build_archive`], calling `on_outcome` as soon as each item has been
/// processed so callers can report progress before the build completes.
pub fn build_archive_with<F>(
    base_dir: &Path,
    prefix: &str,
    items: &[ItemSpec],
    clock: &dyn Clock,
    mut on_outcome: F,
) -> Result<BuildReport>
where
    F: FnMut(&ItemSpec, &ItemOutcome),
{
    let archive_path = base_dir.join(archive_file_name(prefix, clock));
    info!("Creating archive {}", archive_path.display());

    let mut writer = ArchiveWriter::create(&archive_path)?;
    let mut outcomes = Vec::with_capacity(items.len());

    for item in items {
        debug!("Resolving {} item '{}'", item.kind, item.name);
        let source = base_dir.join(&item.name);
        let name = item.name.clone();
        let outcome = match (item.kind, resolve(&source)?) {
            (_, Resolved::File { size }) => {
                match writer.add_file(&entry_name(base_dir, &source)?, &source)? {
                    Some(_) => ItemOutcome::AddedFile { name, size },
                    None => ItemOutcome::AlreadyIncluded { name },
                }
            }
            (ItemKind::Required, Resolved::Directory) => {
                let files = add_directory_tree(&mut writer, base_dir, &source)?;
                ItemOutcome::AddedDir { name, files }
            }
            (ItemKind::Required, other) => {
                warn!("Required item '{}' not found ({:?}), skipping", name, other);
                ItemOutcome::NotFound { name }
            }
            (ItemKind::Optional, other) => {
                debug!("Optional item '{}' skipped ({:?})", name, other);
                ItemOutcome::Skipped { name }
            }
        };
        debug!("Outcome for '{}': {:?}", outcome.name(), outcome);
        on_outcome(item, &outcome);
        outcomes.push(outcome);
    }

    let archive_path = writer.finish()?;
    let files_added = outcomes.iter().map(ItemOutcome::files_added).sum();
    info!(
        "Archive {} complete with {} files",
        archive_path.display(),
        files_added
    );
    Ok(BuildReport {
        archive_path,
        files_added,
        outcomes,
    })
}

/// Archives every node under `root`; returns the number of new file entries.
fn add_directory_tree(writer: &mut ArchiveWriter, base_dir: &Path, root: &Path) -> Result<usize> {
    let mut files = 0;
    walk_tree(root, |node| {
        match node.kind {
            NodeKind::Directory => {
                writer.add_directory(&entry_name(base_dir, &node.path)?, &node.path)?;
            }
            NodeKind::File if writer.is_output(&node.path) => {
                debug!("Not adding the archive to itself: {}", node.path.display());
            }
            NodeKind::File => {
                if writer
                    .add_file(&entry_name(base_dir, &node.path)?, &node.path)?
                    .is_some()
                {
                    files += 1;
                }
            }
            NodeKind::Unsupported => {
                debug!("Skipping unsupported node {}", node.path.display());
            }
        }
        Ok(())
    })?;
    Ok(files)
}

/// `path` relative to `base_dir`, `/`-separated.
fn entry_name(base_dir: &Path, path: &Path) -> Result<String> {
    let relative = path.strip_prefix(base_dir).map_err(|_| {
        anyhow!(PackupError::FileSystem(format!(
            "{} is outside the base directory {}",
            path.display(),
            base_dir.display()
        )))
    })?;
    let parts: Vec<_> = relative
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy()),
            _ => None,
        })
        .collect();
    Ok(parts.join("/"))
}
