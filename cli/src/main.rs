//! # Packup Main Entry Point
//!
//! File: cli/src/main.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Entry point for the Packup CLI, which bundles coursework submission files
//! into a timestamped ZIP archive. It handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on verbosity flags
//! - Routing execution to the command handlers
//!
//! Running `packup` with no subcommand is the same as `packup build`.
//!
//! ## Examples
//!
//! ```bash
//! # Build the archive from the current directory with the configured items
//! packup
//!
//! # Same, with info-level logs on stderr
//! packup -v build
//!
//! # Inspect the result
//! packup list Mesh_Data_Transformation_Submission_20251110_142233.zip
//! ```
//!
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

mod commands; // Command handlers (build, list)
mod common; // Shared utilities (archive, fs, ui)
mod core; // Core infrastructure (clock, config, error)

/// Top-level command-line arguments.
#[derive(Parser, Debug)]
#[command(
    name = "packup",
    about = "Bundle coursework submission files into a timestamped ZIP archive",
    long_about = "Packages a fixed set of required and optional files and folders from a base\n\
                  directory into <prefix>_<YYYYMMDD_HHMMSS>.zip inside that directory.",
    propagate_version = true,
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
    /// Increase log verbosity (-v info, -vv debug, -vvv trace). RUST_LOG takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    /// Configuration file to use instead of the discovered `.packup.toml`.
    #[arg(long, env = "PACKUP_CONFIG", global = true, value_name = "FILE")]
    config: Option<PathBuf>,
}

/// All available top-level commands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Create the submission archive (default).
    #[command(alias = "b")]
    Build(commands::build::BuildArgs),
    /// List the entries of an existing archive.
    #[command(alias = "ls")]
    List(commands::list::ListArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    let config_path = cli.config.as_deref();
    let command_result = match cli.command {
        Some(Commands::Build(args)) => commands::build::handle_build(args, config_path),
        Some(Commands::List(args)) => commands::list::handle_list(args),
        None => commands::build::handle_build(Default::default(), config_path),
    };

    if let Err(e) = command_result {
        tracing::error!("Command execution failed: {:?}", e);
        eprintln!("\n✗ Error: {:#}\n", e);
        std::process::exit(1);
    }

    Ok(())
}
