//! Folder-structure check.
//!
//! Existence checks only: nothing is created and no contents are
//! inspected. Paths are resolved relative to the project root.

use std::path::Path;

use crate::audit::report::{AuditSection, CheckOutcome, SectionKind};

/// The folders the analysis project expects, relative to the project root.
pub const REQUIRED_DIRS: &[&str] = &[
    "data/raw",
    "data/processed",
    "notebooks",
    "models",
    "results/figures",
    "results/metrics",
    "results/reports",
];

/// Run the folder-structure section.
pub fn check(project_root: &Path) -> AuditSection {
    let outcomes = REQUIRED_DIRS
        .iter()
        .map(|dir| {
            let label = format!("{dir}/");
            if project_root.join(dir).exists() {
                CheckOutcome::pass(label)
            } else {
                CheckOutcome::fail(label, "missing")
            }
        })
        .collect();
    AuditSection::new(SectionKind::Workspace, outcomes)
}
