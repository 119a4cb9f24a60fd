//! Structured audit results.
//!
//! Each check produces a [`CheckOutcome`]; outcomes are grouped into
//! [`AuditSection`]s inside an [`AuditReport`]. The final verdict is
//! derived from the outcomes rather than accumulated in shared state,
//! so the audit is independently testable and callers decide what to do
//! with an incomplete environment.

use serde::Serialize;

/// Canonical status of a single check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckStatus {
    /// Check passed.
    Pass,
    /// Non-fatal finding (e.g., package present but version unreadable,
    /// or an interpreter older than the stack expects).
    Warn,
    /// Check failed; the environment is not ready.
    Fail,
    /// Check could not run (no interpreter available).
    Skipped,
}

impl CheckStatus {
    /// Unicode icon for terminal output.
    pub fn icon(self) -> &'static str {
        match self {
            Self::Pass => "✓",
            Self::Warn => "⚠",
            Self::Fail => "✗",
            Self::Skipped => "○",
        }
    }
}

/// The result of one check.
#[derive(Debug, Clone, Serialize)]
pub struct CheckOutcome {
    /// What was checked (package display name, directory path, ...).
    pub label: String,
    /// How the check went.
    pub status: CheckStatus,
    /// Supporting detail: installed version, error message, hint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl CheckOutcome {
    /// A passing outcome.
    pub fn pass(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            status: CheckStatus::Pass,
            detail: None,
        }
    }

    /// A passing outcome with detail (typically an installed version).
    pub fn pass_with(label: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            status: CheckStatus::Pass,
            detail: Some(detail.into()),
        }
    }

    /// A warning outcome.
    pub fn warn(label: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            status: CheckStatus::Warn,
            detail: Some(detail.into()),
        }
    }

    /// A failing outcome.
    pub fn fail(label: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            status: CheckStatus::Fail,
            detail: Some(detail.into()),
        }
    }

    /// A skipped outcome.
    pub fn skipped(label: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            status: CheckStatus::Skipped,
            detail: Some(detail.into()),
        }
    }
}

/// The fixed audit sections, in run order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Interpreter,
    Packages,
    Notebook,
    Capabilities,
    Workspace,
}

impl SectionKind {
    /// Section heading shown in human output.
    pub fn title(self) -> &'static str {
        match self {
            Self::Interpreter => "Python interpreter",
            Self::Packages => "Required libraries",
            Self::Notebook => "Jupyter environment",
            Self::Capabilities => "Critical imports",
            Self::Workspace => "Folder structure",
        }
    }
}

/// One section of the audit: a group of related outcomes.
#[derive(Debug, Clone, Serialize)]
pub struct AuditSection {
    pub kind: SectionKind,
    pub outcomes: Vec<CheckOutcome>,
}

impl AuditSection {
    /// Create a section from outcomes.
    pub fn new(kind: SectionKind, outcomes: Vec<CheckOutcome>) -> Self {
        Self { kind, outcomes }
    }

    /// Whether any outcome in this section failed.
    pub fn has_failure(&self) -> bool {
        self.outcomes.iter().any(|o| o.status == CheckStatus::Fail)
    }
}

/// The full audit result: every section, in run order.
#[derive(Debug, Clone, Serialize)]
pub struct AuditReport {
    pub sections: Vec<AuditSection>,
}

impl AuditReport {
    /// The environment is ready iff no check failed anywhere.
    ///
    /// Warnings (unknown versions, old interpreter) and skipped checks
    /// do not flip the verdict by themselves; a skip only ever occurs
    /// alongside a failed interpreter check.
    pub fn is_ready(&self) -> bool {
        !self.sections.iter().any(AuditSection::has_failure)
    }

    /// Total number of failed checks across all sections.
    pub fn failure_count(&self) -> usize {
        self.sections
            .iter()
            .flat_map(|s| &s.outcomes)
            .filter(|o| o.status == CheckStatus::Fail)
            .count()
    }

    /// Look up a section by kind.
    pub fn section(&self, kind: SectionKind) -> Option<&AuditSection> {
        self.sections.iter().find(|s| s.kind == kind)
    }
}
