//! Command-line interface for labcheck.
//!
//! This module provides the CLI argument parsing using clap's derive
//! macros and the top-level run logic that wires arguments, audit, and
//! rendering together.
//!
//! # Architecture
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`run`] - Execute the audit per the parsed arguments

pub mod args;

use std::io;
use std::path::PathBuf;

use crate::audit::Auditor;
use crate::error::{LabcheckError, Result};
use crate::report::{should_use_colors, HumanFormatter, JsonFormatter, OutputFormat, ReportFormatter};

pub use args::Cli;

/// Result of a CLI run.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the audited environment is ready.
    pub ready: bool,

    /// Exit code to use.
    pub exit_code: i32,
}

/// Run the audit as directed by the CLI arguments, writing the report
/// to stdout.
///
/// The default exit code is 0 whatever the verdict; `--check` maps an
/// incomplete environment to exit code 1 for CI use.
pub fn run(cli: &Cli) -> Result<CommandResult> {
    let format = OutputFormat::parse(&cli.format).ok_or_else(|| LabcheckError::UnknownFormat {
        format: cli.format.clone(),
    })?;

    let project_root = resolve_project_root(cli)?;

    let mut auditor = Auditor::new(&project_root);
    if let Some(python) = &cli.python {
        auditor = auditor.with_python(python.clone());
    }
    let report = auditor.run();

    let stdout = io::stdout();
    let mut writer = stdout.lock();
    match format {
        OutputFormat::Human => {
            let use_color = !cli.no_color && should_use_colors();
            HumanFormatter::new(use_color, cli.quiet).format(&report, &mut writer)?;
        }
        OutputFormat::Json => JsonFormatter::new().format(&report, &mut writer)?,
    }

    let ready = report.is_ready();
    let exit_code = if cli.check && !ready { 1 } else { 0 };
    Ok(CommandResult { ready, exit_code })
}

/// Resolve the project root: an explicit `--project` must be an
/// existing directory; otherwise the current directory is audited.
fn resolve_project_root(cli: &Cli) -> Result<PathBuf> {
    match &cli.project {
        Some(path) if path.is_dir() => Ok(path.clone()),
        Some(path) => Err(LabcheckError::ProjectRootNotFound { path: path.clone() }),
        None => Ok(std::env::current_dir()?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use tempfile::TempDir;

    #[test]
    fn unknown_format_is_rejected() {
        let cli = Cli::try_parse_from(["labcheck", "--format", "xml"]).unwrap();
        let err = run(&cli).unwrap_err();
        assert!(matches!(err, LabcheckError::UnknownFormat { .. }));
    }

    #[test]
    fn missing_project_root_is_rejected() {
        let cli =
            Cli::try_parse_from(["labcheck", "--project", "/nonexistent/project"]).unwrap();
        let err = run(&cli).unwrap_err();
        assert!(matches!(err, LabcheckError::ProjectRootNotFound { .. }));
    }

    #[test]
    fn resolve_project_root_accepts_existing_dir() {
        let temp = TempDir::new().unwrap();
        let cli = Cli::try_parse_from([
            "labcheck",
            "--project",
            temp.path().to_str().unwrap(),
        ])
        .unwrap();
        assert_eq!(resolve_project_root(&cli).unwrap(), temp.path());
    }

    #[test]
    fn default_exit_code_is_zero_even_when_incomplete() {
        let temp = TempDir::new().unwrap();
        let cli = Cli::try_parse_from([
            "labcheck",
            "--project",
            temp.path().to_str().unwrap(),
            "--python",
            "/nonexistent/python3",
            "--quiet",
        ])
        .unwrap();
        let result = run(&cli).unwrap();
        assert!(!result.ready);
        assert_eq!(result.exit_code, 0);
    }

    #[test]
    fn check_flag_maps_incomplete_to_exit_one() {
        let temp = TempDir::new().unwrap();
        let cli = Cli::try_parse_from([
            "labcheck",
            "--project",
            temp.path().to_str().unwrap(),
            "--python",
            "/nonexistent/python3",
            "--quiet",
            "--check",
        ])
        .unwrap();
        let result = run(&cli).unwrap();
        assert!(!result.ready);
        assert_eq!(result.exit_code, 1);
    }
}
