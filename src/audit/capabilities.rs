//! Capability-import check.
//!
//! A package can be installed yet broken (partial install, ABI mismatch,
//! missing extras). This section imports the specific symbols the
//! analysis pipeline uses, as one atomic snippet: any single failure
//! fails the whole group and the interpreter's error message is
//! surfaced verbatim.

use crate::audit::report::{AuditSection, CheckOutcome, SectionKind};
use crate::python::{Interpreter, SnippetOutput};

/// One logical sub-group of the capability snippet.
#[derive(Debug, Clone, Copy)]
pub struct CapabilityGroup {
    /// Confirmation label shown when the whole snippet succeeds.
    pub label: &'static str,
    /// Import statement(s) for this group.
    pub imports: &'static str,
}

/// The capabilities the analysis pipeline relies on, in import order.
pub const CAPABILITY_GROUPS: &[CapabilityGroup] = &[
    CapabilityGroup {
        label: "RandomForestClassifier",
        imports: "from sklearn.ensemble import RandomForestClassifier",
    },
    CapabilityGroup {
        label: "SMOTE & ADASYN",
        imports: "from imblearn.over_sampling import SMOTE, ADASYN",
    },
    CapabilityGroup {
        label: "SHAP explainers",
        imports: "import shap",
    },
    CapabilityGroup {
        label: "RandomizedSearchCV & StratifiedKFold",
        imports: "from sklearn.model_selection import RandomizedSearchCV, StratifiedKFold",
    },
    CapabilityGroup {
        label: "evaluation metrics",
        imports: "from sklearn.metrics import roc_auc_score, precision_recall_curve, \
                  confusion_matrix, classification_report, cohen_kappa_score, matthews_corrcoef",
    },
];

/// The combined snippet: all groups, newline-separated.
///
/// `python -c` accepts multi-line programs; execution stops at the first
/// failing import, which gives the atomic-group semantics.
fn group_snippet() -> String {
    CAPABILITY_GROUPS
        .iter()
        .map(|g| g.imports)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Build the section from the snippet result.
pub fn section_from_output(output: &SnippetOutput) -> AuditSection {
    let outcomes = if output.success {
        CAPABILITY_GROUPS
            .iter()
            .map(|g| CheckOutcome::pass(g.label))
            .collect()
    } else {
        let detail = output
            .error_line()
            .unwrap_or("import failed with no error output")
            .to_string();
        vec![CheckOutcome::fail("capability imports", detail)]
    };
    AuditSection::new(SectionKind::Capabilities, outcomes)
}

/// Run the capability section.
pub fn check(py: &Interpreter) -> AuditSection {
    let output = py.run_snippet(&group_snippet());
    section_from_output(&output)
}

/// Capability section when no interpreter is available.
pub fn skipped() -> AuditSection {
    AuditSection::new(
        SectionKind::Capabilities,
        vec![CheckOutcome::skipped(
            "capability imports",
            "interpreter unavailable",
        )],
    )
}
