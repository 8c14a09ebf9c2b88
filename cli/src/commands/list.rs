//! # Packup List Command
//!
//! File: cli/src/commands/list.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Implements `packup list <ARCHIVE>`: prints every entry of an existing ZIP
//! archive in archive order, so a submission can be checked before it is
//! handed in.
//!
//! Example output:
//!
//! ```text
//! Kind         Size   Compressed  Name
//! dir             0            0  8samples/
//! file        1,204          611  8samples/a.obj
//!
//! 1 file(s), 1 folder(s), 1,204 bytes uncompressed.
//! ```
//!
use crate::common::archive::listing::{self, ListedEntry};
use crate::common::ui::report::thousands;
use crate::core::error::{PackupError, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

/// Arguments for `packup list`.
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Path to the ZIP archive to inspect.
    pub archive: PathBuf,
}

/// # Handle List Command (`handle_list`)
///
/// ## Errors
///
/// Returns an `Err` if the path is not a file or cannot be read as a ZIP archive.
pub fn handle_list(args: ListArgs) -> Result<()> {
    info!("Listing archive {}", args.archive.display());
    if !args.archive.is_file() {
        anyhow::bail!(PackupError::FileSystem(format!(
            "Archive '{}' not found",
            args.archive.display()
        )));
    }

    let entries = listing::list_entries(&args.archive)?;
    print!("{}", render_listing(&entries));
    Ok(())
}

fn render_listing(entries: &[ListedEntry]) -> String {
    let mut out = format!("{:<6} {:>10} {:>12}  {}\n", "Kind", "Size", "Compressed", "Name");
    for entry in entries {
        let kind = if entry.is_dir { "dir" } else { "file" };
        out.push_str(&format!(
            "{:<6} {:>10} {:>12}  {}\n",
            kind,
            thousands(entry.size),
            thousands(entry.compressed_size),
            entry.name
        ));
    }
    let (dirs, files): (Vec<&ListedEntry>, Vec<&ListedEntry>) =
        entries.iter().partition(|e| e.is_dir);
    let total: u64 = files.iter().map(|e| e.size).sum();
    out.push_str(&format!(
        "\n{} file(s), {} folder(s), {} bytes uncompressed.\n",
        files.len(),
        dirs.len(),
        thousands(total)
    ));
    out
}
