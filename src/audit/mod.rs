//! The environment audit: checks and the structured report they produce.
//!
//! The audit is a fixed sequence of sections run by [`Auditor::run`].
//! Every failure is soft — a failed check is recorded and the remaining
//! sections still run, because the tool's value is a complete picture,
//! not fail-fast behavior. The one dependency between sections is the
//! interpreter: package, notebook, and capability checks cannot run
//! without one and are recorded as skipped when discovery fails.
//!
//! # Modules
//!
//! - [`capabilities`] - Atomic import check of pipeline-critical symbols
//! - [`interpreter`] - Interpreter presence and minimum-version check
//! - [`packages`] - Required-library and notebook package checks
//! - [`report`] - Outcome, section, and report types
//! - [`workspace`] - Folder-structure existence checks

pub mod capabilities;
pub mod interpreter;
pub mod packages;
pub mod report;
pub mod workspace;

use std::path::{Path, PathBuf};

use crate::python::Interpreter;

pub use report::{AuditReport, AuditSection, CheckOutcome, CheckStatus, SectionKind};

/// Runs the full audit against a project root.
#[derive(Debug, Clone)]
pub struct Auditor {
    project_root: PathBuf,
    python_override: Option<PathBuf>,
}

impl Auditor {
    /// Create an auditor for the given project root.
    pub fn new(project_root: &Path) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            python_override: None,
        }
    }

    /// Use a specific interpreter instead of discovering one on PATH.
    pub fn with_python(mut self, path: PathBuf) -> Self {
        self.python_override = Some(path);
        self
    }

    /// Run every section in order and collect the report.
    pub fn run(&self) -> AuditReport {
        tracing::debug!("auditing project root {}", self.project_root.display());
        let py = Interpreter::discover(self.python_override.as_deref());

        let mut sections = Vec::with_capacity(5);
        sections.push(interpreter::check(
            py.as_ref(),
            self.python_override.as_deref(),
        ));

        match &py {
            Some(py) => {
                sections.push(packages::check_required(py));
                sections.push(packages::check_notebook(py));
                sections.push(capabilities::check(py));
            }
            None => {
                sections.push(packages::skipped_required());
                sections.push(packages::skipped_notebook());
                sections.push(capabilities::skipped());
            }
        }

        sections.push(workspace::check(&self.project_root));

        let report = AuditReport { sections };
        tracing::debug!(
            "audit finished: ready={}, failures={}",
            report.is_ready(),
            report.failure_count()
        );
        report
    }
}
