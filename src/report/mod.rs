//! Rendering of audit reports.
//!
//! The audit produces structured outcomes; this module turns them into
//! output. Formatters are deliberately separate from the checks so a
//! machine-readable format never touches the audit logic.
//!
//! # Modules
//!
//! - [`human`] - Terminal checklist with icons and banners
//! - [`json`] - Machine-readable JSON
//! - [`theme`] - Color styles and TTY detection

pub mod human;
pub mod json;
pub mod theme;

use crate::audit::AuditReport;
use std::io::Write;

/// Output format for the audit report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Human,
    Json,
}

impl OutputFormat {
    /// Parse a format name as given on the command line.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "human" => Some(Self::Human),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Trait for formatting an audit report.
pub trait ReportFormatter {
    /// Format the report to the given writer.
    fn format<W: Write>(&self, report: &AuditReport, writer: &mut W) -> std::io::Result<()>;
}

pub use human::HumanFormatter;
pub use json::JsonFormatter;
pub use theme::{should_use_colors, Theme};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_formats() {
        assert_eq!(OutputFormat::parse("human"), Some(OutputFormat::Human));
        assert_eq!(OutputFormat::parse("json"), Some(OutputFormat::Json));
    }

    #[test]
    fn rejects_unknown_formats() {
        assert_eq!(OutputFormat::parse("yaml"), None);
        assert_eq!(OutputFormat::parse(""), None);
        assert_eq!(OutputFormat::parse("JSON"), None);
    }
}
