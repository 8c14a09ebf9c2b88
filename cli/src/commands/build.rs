//! # Packup Build Command
//!
//! File: cli/src/commands/build.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module implements `packup build`, which is also what runs when
//! `packup` is invoked without a subcommand. It handles:
//! - Loading the configuration and applying command-line overrides
//! - Determining the base directory to package
//! - Running the archive builder, printing each item's line as it is processed
//! - Printing the size summary and the checklist
//!
//! ## Examples
//!
//! ```bash
//! # Package the configured items from the current directory
//! packup
//!
//! # Package a different directory under a different name
//! packup build --base-dir ~/coursework/lab3 --prefix Lab3_Submission
//!
//! # Replace the item lists for one run
//! packup build -r report.pdf -r src -o requirements.txt
//! ```
//!
use crate::common::archive::builder;
use crate::common::archive::item::{ItemKind, ItemSpec};
use crate::common::ui::report;
use crate::core::clock::SystemClock;
use crate::core::config::{self, Config};
use crate::core::error::{PackupError, Result};
use anyhow::{anyhow, Context};
use clap::Parser;
use std::fs;
use std::path::{Component, Path, PathBuf};
use tracing::{debug, info};

/// # Build Command Arguments (`BuildArgs`)
///
/// Every flag is optional; anything left unset falls back to the loaded
/// configuration.
#[derive(Parser, Debug, Default)]
pub struct BuildArgs {
    /// Directory to package; the archive is written here too. Defaults to the current directory.
    #[arg(short = 'd', long, value_name = "DIR")]
    pub base_dir: Option<PathBuf>,

    /// Archive name prefix (the timestamp and .zip are appended).
    #[arg(short, long)]
    pub prefix: Option<String>,

    /// Required item (repeatable). Replaces the configured required list.
    #[arg(short, long = "required", value_name = "NAME")]
    pub required: Vec<String>,

    /// Optional item (repeatable). Replaces the configured optional list.
    #[arg(short, long = "optional", value_name = "NAME")]
    pub optional: Vec<String>,

    /// Do not print the submission checklist after a successful build.
    #[arg(long)]
    pub no_checklist: bool,
}

/// # Handle Build Command (`handle_build`)
///
/// Loads configuration (optionally from `config_path`), builds the archive and
/// prints the report.
///
/// ## Errors
///
/// Returns an `Err` if the configuration is invalid, or if the archive cannot
/// be created or written. Missing items are reported, not returned as errors.
pub fn handle_build(args: BuildArgs, config_path: Option<&Path>) -> Result<()> {
    info!("Handling build command with args: {:?}", args);

    let mut cfg = config::load_config(config_path)?;
    apply_overrides(&mut cfg, &args)?;
    let base_dir = effective_base_dir(args.base_dir.as_deref(), cfg.base_dir.as_deref())?;
    info!("Packaging items from {}", base_dir.display());

    let items = ItemSpec::from_lists(cfg.items.required.clone(), cfg.items.optional.clone());

    print!("{}", report::banner("Creating Submission ZIP File"));
    let mut section = None;
    let build = builder::build_archive_with(
        &base_dir,
        &cfg.archive.prefix,
        &items,
        &SystemClock,
        |item, outcome| {
            print_section_change(&mut section, item.kind);
            println!("{}", report::outcome_line(outcome));
        },
    )?;
    // Both headings appear even when a list is empty.
    print_section_change(&mut section, ItemKind::Required);
    print_section_change(&mut section, ItemKind::Optional);

    let archive_size = fs::metadata(&build.archive_path)
        .with_context(|| format!("Failed to stat archive {}", build.archive_path.display()))?
        .len();
    let file_name = build
        .archive_path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    print!(
        "{}",
        report::summary(
            &file_name,
            &display_location(&build.archive_path),
            archive_size,
            build.files_added
        )
    );

    if !args.no_checklist {
        print!("{}", report::checklist(&cfg.checklist.items));
    }

    println!(
        "\n✓ Success! ZIP file created at:\n  {}\n",
        build.archive_path.display()
    );
    Ok(())
}

/// Prints the heading for `kind`, and for any section before it, the first time it is reached.
fn print_section_change(current: &mut Option<ItemKind>, kind: ItemKind) {
    let headings: &[ItemKind] = match (*current, kind) {
        (None, ItemKind::Required) => &[ItemKind::Required],
        (None, ItemKind::Optional) => &[ItemKind::Required, ItemKind::Optional],
        (Some(ItemKind::Required), ItemKind::Optional) => &[ItemKind::Optional],
        _ => &[],
    };
    for heading in headings {
        println!("{}", report::section_heading(*heading));
        *current = Some(*heading);
    }
}

/// Command-line values replace configured ones; the result is re-validated.
fn apply_overrides(cfg: &mut Config, args: &BuildArgs) -> Result<()> {
    if let Some(prefix) = &args.prefix {
        if prefix.trim().is_empty() {
            return Err(anyhow!(PackupError::ArgumentParsing(
                "--prefix cannot be empty".to_string()
            )));
        }
        cfg.archive.prefix = prefix.clone();
    }
    if !args.required.is_empty() {
        cfg.items.required = args.required.clone();
    }
    if !args.optional.is_empty() {
        cfg.items.optional = args.optional.clone();
    }
    config::validate_config(cfg).context("Invalid command-line overrides")?;
    debug!("Configuration after overrides: {:?}", cfg);
    Ok(())
}

/// CLI flag, then config, then the current directory; relative paths are anchored at the current directory.
fn effective_base_dir(cli: Option<&Path>, configured: Option<&str>) -> Result<PathBuf> {
    let current_dir = std::env::current_dir().context("Failed to get current directory")?;
    let chosen = match (cli, configured) {
        (Some(dir), _) => dir.to_path_buf(),
        (None, Some(dir)) => PathBuf::from(dir),
        (None, None) => return Ok(current_dir),
    };
    Ok(if chosen.is_absolute() {
        chosen
    } else {
        current_dir.join(chosen)
    })
}

/// Relative to the working directory when the archive sits beneath it, absolute otherwise.
fn display_location(archive_path: &Path) -> String {
    std::env::current_dir()
        .ok()
        .and_then(|cwd| pathdiff::diff_paths(archive_path, cwd))
        .filter(|rel| !rel.components().any(|c| c == Component::ParentDir))
        .map(|rel| Path::new(".").join(rel).display().to_string())
        .unwrap_or_else(|| archive_path.display().to_string())
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_repeated_items() {
        let args = BuildArgs::try_parse_from([
            "build",
            "-r",
            "README.md",
            "--required",
            "8samples",
            "-o",
            "requirements.txt",
            "--no-checklist",
        ])
        .unwrap();
        assert_eq!(args.required, vec!["README.md", "8samples"]);
        assert_eq!(args.optional, vec!["requirements.txt"]);
        assert!(args.no_checklist);
        assert!(args.base_dir.is_none());
    }

    #[test]
    fn test_overrides_replace_lists() {
        let mut cfg = Config::default();
        let args = BuildArgs {
            prefix: Some("Lab3".into()),
            required: vec!["main.py".into()],
            ..Default::default()
        };
        apply_overrides(&mut cfg, &args).unwrap();
        assert_eq!(cfg.archive.prefix, "Lab3");
        assert_eq!(cfg.items.required, vec!["main.py"]);
        assert_eq!(cfg.items.optional, Config::default().items.optional);
    }

    #[test]
    fn test_empty_prefix_override_rejected() {
        let mut cfg = Config::default();
        let args = BuildArgs {
            prefix: Some("  ".into()),
            ..Default::default()
        };
        let err = apply_overrides(&mut cfg, &args).unwrap_err();
        assert!(err.to_string().contains("--prefix cannot be empty"));
    }

    #[test]
    fn test_escaping_item_override_rejected() {
        let mut cfg = Config::default();
        let args = BuildArgs {
            optional: vec!["../other/notes.txt".into()],
            ..Default::default()
        };
        assert!(apply_overrides(&mut cfg, &args).is_err());
    }

    #[test]
    fn test_section_headings_advance_once() {
        let mut section = None;
        print_section_change(&mut section, ItemKind::Required);
        assert_eq!(section, Some(ItemKind::Required));
        print_section_change(&mut section, ItemKind::Optional);
        assert_eq!(section, Some(ItemKind::Optional));
        print_section_change(&mut section, ItemKind::Required);
        assert_eq!(section, Some(ItemKind::Optional));
    }

    #[test]
    fn test_effective_base_dir_precedence() {
        let cwd = std::env::current_dir().unwrap();
        assert_eq!(effective_base_dir(None, None).unwrap(), cwd);
        assert_eq!(
            effective_base_dir(None, Some("/from/config")).unwrap(),
            PathBuf::from("/from/config")
        );
        assert_eq!(
            effective_base_dir(Some(Path::new("rel")), Some("/from/config")).unwrap(),
            cwd.join("rel")
        );
    }

    #[test]
    fn test_display_location_outside_cwd_is_absolute() {
        let outside = Path::new("/definitely/not/under/cwd/sub.zip");
        let cwd = std::env::current_dir().unwrap();
        if !outside.starts_with(&cwd) {
            assert_eq!(display_location(outside), outside.display().to_string());
        }
    }
}
