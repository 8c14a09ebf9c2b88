//! # Packup Console Report (`common::ui::report`)
//!
//! File: cli/src/common/ui/report.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Text rendering for the human-readable build report. Every function here
//! returns a `String`; the command handlers decide where it is printed, and
//! item lines are printed as each item is processed. None of this output is
//! parsed by anything, so the wording can change freely.
//!
//! Example (abridged):
//!
//! ```text
//! ======================================================================
//! Creating Submission ZIP File
//! ======================================================================
//!
//! Adding required files and folders:
//!
//!   ✓ Added file: README.md (1,204 bytes)
//!   ✓ Added folder: 8samples/ (8 files)
//!   ✗ Warning: processed_meshes not found - skipping
//! ```
//!
use crate::common::archive::item::{ItemKind, ItemOutcome};
use std::fmt::Write;

const RULE_WIDTH: usize = 70;

/// A title framed by `=` rules.
pub fn banner(title: &str) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    format!("\n{rule}\n{title}\n{rule}\n")
}

/// One indented status line for an item.
pub fn outcome_line(outcome: &ItemOutcome) -> String {
    match outcome {
        ItemOutcome::AddedFile { name, size } => {
            format!("  ✓ Added file: {} ({} bytes)", name, thousands(*size))
        }
        ItemOutcome::AddedDir { name, files } => {
            format!("  ✓ Added folder: {}/ ({} files)", name, files)
        }
        ItemOutcome::NotFound { name } => format!("  ✗ Warning: {} not found - skipping", name),
        ItemOutcome::Skipped { name } => format!("  - Skipped: {} (not found)", name),
        ItemOutcome::AlreadyIncluded { name } => {
            format!("  - Skipped: {} (already included)", name)
        }
    }
}

/// Heading printed before the first line of each item kind.
pub fn section_heading(kind: ItemKind) -> String {
    match kind {
        ItemKind::Required => "Adding required files and folders:\n".to_string(),
        ItemKind::Optional => "\nAdding optional files:\n".to_string(),
    }
}

/// Post-build summary: file name, location, size, file count.
pub fn summary(file_name: &str, location: &str, archive_size: u64, files_added: usize) -> String {
    let mut out = banner("ZIP File Created Successfully!");
    let _ = writeln!(out, "Filename: {}", file_name);
    let _ = writeln!(out, "Location: {}", location);
    let _ = writeln!(
        out,
        "Size: {} bytes ({} MB)",
        thousands(archive_size),
        megabytes(archive_size)
    );
    let _ = writeln!(out, "Total files added: {}", files_added);
    out
}

/// Checklist lines plus the fixed follow-up steps.
pub fn checklist(items: &[String]) -> String {
    let mut out = banner("Submission Checklist:");
    for item in items {
        let _ = writeln!(out, "  ✓ {}", item);
    }
    out.push_str("\nNext steps:\n");
    out.push_str("  1. Verify the ZIP contents (packup list <archive>)\n");
    out.push_str("  2. Test run the notebook from the extracted folder\n");
    out.push_str("  3. Submit the ZIP file\n");
    out
}

/// `1234567` -> `"1,234,567"`.
pub fn thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Bytes as mebibytes with two decimals.
pub fn megabytes(bytes: u64) -> String {
    format!("{:.2}", bytes as f64 / (1024.0 * 1024.0))
}
