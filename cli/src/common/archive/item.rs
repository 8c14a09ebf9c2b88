//! # Packup Submission Items (`common::archive::item`)
//!
//! File: cli/src/common/archive/item.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! An item is a name relative to the base directory plus a classification.
//! Both kinds are attempted; they differ only in how a miss is reported and
//! in whether directories are accepted:
//!
//! | Kind       | Missing                  | Directory              |
//! |------------|--------------------------|------------------------|
//! | `Required` | warning, build continues | archived recursively   |
//! | `Optional` | "skipped"                | "skipped"              |
//!
use std::fmt;

/// Whether an item must be present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    Required,
    Optional,
}

/// A named file or directory to include, relative to the base directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemSpec {
    pub name: String,
    pub kind: ItemKind,
}

impl ItemSpec {
    pub fn required(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: ItemKind::Required,
        }
    }

    pub fn optional(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: ItemKind::Optional,
        }
    }

    /// Flattens the two lists into declaration order: all required items, then all optional ones.
    pub fn from_lists<R, O>(required: R, optional: O) -> Vec<ItemSpec>
    where
        R: IntoIterator,
        R::Item: Into<String>,
        O: IntoIterator,
        O::Item: Into<String>,
    {
        required
            .into_iter()
            .map(|name| ItemSpec::required(name))
            .chain(optional.into_iter().map(|name| ItemSpec::optional(name)))
            .collect()
    }
}

/// What happened to one item during a build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemOutcome {
    /// A regular file was written as a single entry.
    AddedFile { name: String, size: u64 },
    /// A required directory was written recursively; `files` excludes directory entries.
    AddedDir { name: String, files: usize },
    /// A required item was absent.
    NotFound { name: String },
    /// An optional item was absent or was not a regular file.
    Skipped { name: String },
    /// A file item whose entry an earlier item already wrote.
    AlreadyIncluded { name: String },
}

impl ItemOutcome {
    pub fn name(&self) -> &str {
        match self {
            ItemOutcome::AddedFile { name, .. }
            | ItemOutcome::AddedDir { name, .. }
            | ItemOutcome::NotFound { name }
            | ItemOutcome::Skipped { name }
            | ItemOutcome::AlreadyIncluded { name } => name,
        }
    }

    /// Number of file entries this outcome contributed to the archive.
    pub fn files_added(&self) -> usize {
        match self {
            ItemOutcome::AddedFile { .. } => 1,
            ItemOutcome::AddedDir { files, .. } => *files,
            ItemOutcome::NotFound { .. }
            | ItemOutcome::Skipped { .. }
            | ItemOutcome::AlreadyIncluded { .. } => 0,
        }
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemKind::Required => write!(f, "required"),
            ItemKind::Optional => write!(f, "optional"),
        }
    }
}
