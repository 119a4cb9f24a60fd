//! JSON output formatter.
//!
//! Formats the audit report as machine-readable JSON for tooling
//! integration (CI gates, dashboards).

use super::ReportFormatter;
use crate::audit::{AuditReport, CheckStatus};
use serde::Serialize;
use std::io::Write;

/// Formats the audit report as JSON.
pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput<'a> {
    ready: bool,
    sections: &'a [crate::audit::AuditSection],
    summary: JsonSummary,
}

#[derive(Serialize)]
struct JsonSummary {
    total: usize,
    passed: usize,
    warnings: usize,
    failures: usize,
    skipped: usize,
}

impl JsonFormatter {
    /// Create a new JSON formatter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for JsonFormatter {
    fn format<W: Write>(&self, report: &AuditReport, writer: &mut W) -> std::io::Result<()> {
        let count = |status: CheckStatus| {
            report
                .sections
                .iter()
                .flat_map(|s| &s.outcomes)
                .filter(|o| o.status == status)
                .count()
        };

        let summary = JsonSummary {
            total: report.sections.iter().map(|s| s.outcomes.len()).sum(),
            passed: count(CheckStatus::Pass),
            warnings: count(CheckStatus::Warn),
            failures: count(CheckStatus::Fail),
            skipped: count(CheckStatus::Skipped),
        };

        let output = JsonOutput {
            ready: report.is_ready(),
            sections: &report.sections,
            summary,
        };

        serde_json::to_writer_pretty(&mut *writer, &output).map_err(std::io::Error::other)?;
        writeln!(writer)?;

        Ok(())
    }
}
