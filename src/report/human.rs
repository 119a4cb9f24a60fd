//! Human-readable output formatter.
//!
//! Renders the audit as a numbered terminal checklist, ending with a
//! ready/incomplete banner and next steps.

use super::theme::Theme;
use super::ReportFormatter;
use crate::audit::workspace::REQUIRED_DIRS;
use crate::audit::{AuditReport, CheckOutcome};
use std::io::Write;

/// Label column width before the detail column.
const LABEL_WIDTH: usize = 24;

/// Formats the audit report for terminal display.
pub struct HumanFormatter {
    theme: Theme,
    quiet: bool,
}

impl HumanFormatter {
    /// Create a human formatter.
    pub fn new(use_color: bool, quiet: bool) -> Self {
        let theme = if use_color {
            Theme::new()
        } else {
            Theme::plain()
        };
        Self { theme, quiet }
    }

    fn write_outcome<W: Write>(&self, outcome: &CheckOutcome, writer: &mut W) -> std::io::Result<()> {
        let icon = self.theme.icon(outcome.status);
        match &outcome.detail {
            Some(detail) => writeln!(
                writer,
                "   {} {:<width$} {}",
                icon,
                outcome.label,
                self.theme.dim.apply_to(detail),
                width = LABEL_WIDTH
            ),
            None => writeln!(writer, "   {} {}", icon, outcome.label),
        }
    }

    fn write_verdict<W: Write>(&self, report: &AuditReport, writer: &mut W) -> std::io::Result<()> {
        if report.is_ready() {
            writeln!(
                writer,
                "{}",
                self.theme
                    .success
                    .apply_to("Environment ready. All checks passed.")
            )?;
            writeln!(writer)?;
            writeln!(writer, "{}", self.theme.highlight.apply_to("Next steps:"))?;
            writeln!(writer, "  1. Fetch the dataset: python scripts/download_dataset.py")?;
            writeln!(writer, "  2. Open notebooks/01_eda_preprocessing.ipynb")?;
            writeln!(writer, "  3. Start the analysis")?;
        } else {
            writeln!(
                writer,
                "{}",
                self.theme.error.apply_to(format!(
                    "Environment incomplete: {} check(s) failed.",
                    report.failure_count()
                ))
            )?;
            writeln!(writer)?;
            writeln!(writer, "{}", self.theme.highlight.apply_to("To fix:"))?;
            writeln!(
                writer,
                "  1. Install missing packages: pip install -r requirements.txt"
            )?;
            writeln!(
                writer,
                "  2. Create missing folders: mkdir -p {}",
                REQUIRED_DIRS.join(" ")
            )?;
            writeln!(writer, "  3. Re-run labcheck")?;
        }
        Ok(())
    }
}

impl ReportFormatter for HumanFormatter {
    fn format<W: Write>(&self, report: &AuditReport, writer: &mut W) -> std::io::Result<()> {
        if !self.quiet {
            writeln!(
                writer,
                "{}",
                self.theme.highlight.apply_to("Auditing analysis environment")
            )?;
            writeln!(writer)?;

            for (index, section) in report.sections.iter().enumerate() {
                writeln!(
                    writer,
                    "{}",
                    self.theme.format_header(index + 1, section.kind.title())
                )?;
                for outcome in &section.outcomes {
                    self.write_outcome(outcome, writer)?;
                }
            }
            writeln!(writer)?;
        }

        self.write_verdict(report, writer)
    }
}
