//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct. Labcheck is a
//! single-purpose tool, so there are no subcommands — running it runs
//! the audit.

use clap::Parser;
use std::path::PathBuf;

/// Labcheck - preflight audit of the Python environment for a data-analysis workspace.
#[derive(Debug, Parser)]
#[command(name = "labcheck")]
#[command(author, version, long_about = None)]
pub struct Cli {
    /// Path to the project root to audit (overrides current directory)
    #[arg(short, long)]
    pub project: Option<PathBuf>,

    /// Python interpreter to probe (overrides PATH discovery)
    #[arg(long, env = "LABCHECK_PYTHON")]
    pub python: Option<PathBuf>,

    /// Output format: human, json
    #[arg(long, default_value = "human")]
    pub format: String,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Print the verdict only, without per-check detail
    #[arg(short, long)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Exit nonzero when the environment is incomplete
    #[arg(long)]
    pub check: bool,
}
