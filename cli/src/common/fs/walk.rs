//! # Packup Directory Walk (`common::fs::walk`)
//!
//! File: cli/src/common/fs/walk.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Enumerates a directory tree for archiving. The walk is pre-order (every
//! directory is visited before anything inside it, starting with the root
//! itself) and keeps the filesystem's own enumeration order; nothing is
//! sorted.
//!
//! ## Architecture
//!
//! Traversal uses `walkdir` without following symbolic links, so a linked
//! directory is never descended into. Each node is handed to a visitor as
//! soon as it is discovered; the caller writes it into the archive before the
//! walk moves on. The visitor may return an error, which stops the walk
//! immediately.
//!
//! Symlinks inside the tree are classified by their target:
//! - link to a regular file: visited as `NodeKind::File` (the target's bytes get archived)
//! - link to a directory, dangling link, or special file: `NodeKind::Unsupported`
//!
//! The root is the exception: a root that is a link to a directory is walked
//! and visited as `NodeKind::Directory`, like the directory it points to.
//!
//! A directory below the root that cannot be read is logged and left out;
//! only a failure to read the root itself ends the walk with an error.
//!
use crate::core::error::Result;
use anyhow::Context;
use std::path::{Path, PathBuf};
use tracing::warn;
use walkdir::{DirEntry, WalkDir};

/// Kind of a node discovered during the walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Directory,
    File,
    Unsupported,
}

/// One node of the walked tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode {
    pub path: PathBuf,
    pub kind: NodeKind,
}

/// Walks `root` in pre-order and calls `visit` for every node, root included.
///
/// # Errors
///
/// Returns an `Err` if the root cannot be read, or if `visit` fails.
pub fn walk_tree<F>(root: &Path, mut visit: F) -> Result<()>
where
    F: FnMut(TreeNode) -> Result<()>,
{
    for entry in WalkDir::new(root).follow_links(false) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) if e.depth() > 0 => {
                warn!("Skipping unreadable path under {}: {}", root.display(), e);
                continue;
            }
            Err(e) => {
                return Err(e).with_context(|| format!("Failed to walk {}", root.display()));
            }
        };
        let kind = classify(&entry);
        visit(TreeNode {
            path: entry.into_path(),
            kind,
        })?;
    }
    Ok(())
}

fn classify(entry: &DirEntry) -> NodeKind {
    let file_type = entry.file_type();
    if file_type.is_dir() {
        NodeKind::Directory
    } else if file_type.is_file() {
        NodeKind::File
    } else if file_type.is_symlink() {
        let target = entry.path();
        if entry.depth() == 0 && target.is_dir() {
            NodeKind::Directory
        } else if target.is_file() {
            NodeKind::File
        } else {
            NodeKind::Unsupported
        }
    } else {
        NodeKind::Unsupported
    }
}
