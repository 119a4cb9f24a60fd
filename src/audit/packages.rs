//! Required-library and notebook checks.
//!
//! Each package is declared as a static [`PackageSpec`] and probed with a
//! `python -c` snippet that imports it and prints its `__version__`.
//! Minimum versions are remediation data only — the audit reports the
//! installed version but does not enforce an ordering against the
//! minimum.

use crate::audit::report::{AuditSection, CheckOutcome, SectionKind};
use crate::python::{Interpreter, SnippetOutput};

/// A package the analysis stack depends on.
///
/// `import_name` is the Python module identifier; `display_name` is the
/// distribution name shown to the user. They differ for scikit-learn and
/// imbalanced-learn, whose import identifiers are abbreviations.
#[derive(Debug, Clone, Copy)]
pub struct PackageSpec {
    pub import_name: &'static str,
    pub display_name: &'static str,
    pub min_version: Option<&'static str>,
}

/// The ten libraries the analysis stack requires.
pub const REQUIRED_PACKAGES: &[PackageSpec] = &[
    PackageSpec {
        import_name: "numpy",
        display_name: "numpy",
        min_version: Some("1.24.0"),
    },
    PackageSpec {
        import_name: "pandas",
        display_name: "pandas",
        min_version: Some("2.0.0"),
    },
    PackageSpec {
        import_name: "scipy",
        display_name: "scipy",
        min_version: Some("1.11.0"),
    },
    PackageSpec {
        import_name: "sklearn",
        display_name: "scikit-learn",
        min_version: Some("1.3.0"),
    },
    PackageSpec {
        import_name: "imblearn",
        display_name: "imbalanced-learn",
        min_version: Some("0.11.0"),
    },
    PackageSpec {
        import_name: "matplotlib",
        display_name: "matplotlib",
        min_version: Some("3.7.0"),
    },
    PackageSpec {
        import_name: "seaborn",
        display_name: "seaborn",
        min_version: Some("0.12.0"),
    },
    PackageSpec {
        import_name: "shap",
        display_name: "shap",
        min_version: Some("0.42.0"),
    },
    PackageSpec {
        import_name: "statsmodels",
        display_name: "statsmodels",
        min_version: Some("0.14.0"),
    },
    PackageSpec {
        import_name: "joblib",
        display_name: "joblib",
        min_version: Some("1.3.0"),
    },
];

/// The notebook-serving package, checked in its own section.
pub const NOTEBOOK_PACKAGE: PackageSpec = PackageSpec {
    import_name: "notebook",
    display_name: "Jupyter Notebook",
    min_version: None,
};

/// Snippet importing a module and printing its version attribute.
///
/// `getattr` with an empty default folds "no `__version__`" into empty
/// stdout, keeping the probe to a single exit-status/stdout contract.
fn probe_snippet(import_name: &str) -> String {
    format!(r#"import {import_name}; print(getattr({import_name}, "__version__", ""))"#)
}

/// Classify a probe result for one package.
pub fn classify(spec: &PackageSpec, output: &SnippetOutput) -> CheckOutcome {
    if !output.success {
        let detail = match spec.min_version {
            Some(min) => format!("not installed (need >= {min})"),
            None => "not installed".to_string(),
        };
        return CheckOutcome::fail(spec.display_name, detail);
    }
    match output.stdout_line() {
        Some(version) => CheckOutcome::pass_with(spec.display_name, format!("v{version}")),
        None => CheckOutcome::warn(spec.display_name, "version unknown"),
    }
}

fn check_one(py: &Interpreter, spec: &PackageSpec) -> CheckOutcome {
    let output = py.run_snippet(&probe_snippet(spec.import_name));
    let outcome = classify(spec, &output);
    tracing::debug!("{}: {:?}", spec.display_name, outcome.status);
    outcome
}

/// Run the required-library section.
pub fn check_required(py: &Interpreter) -> AuditSection {
    let outcomes = REQUIRED_PACKAGES
        .iter()
        .map(|spec| check_one(py, spec))
        .collect();
    AuditSection::new(SectionKind::Packages, outcomes)
}

/// Run the notebook section.
pub fn check_notebook(py: &Interpreter) -> AuditSection {
    AuditSection::new(SectionKind::Notebook, vec![check_one(py, &NOTEBOOK_PACKAGE)])
}

/// Required-library section when no interpreter is available.
pub fn skipped_required() -> AuditSection {
    let outcomes = REQUIRED_PACKAGES
        .iter()
        .map(|spec| CheckOutcome::skipped(spec.display_name, "interpreter unavailable"))
        .collect();
    AuditSection::new(SectionKind::Packages, outcomes)
}

/// Notebook section when no interpreter is available.
pub fn skipped_notebook() -> AuditSection {
    AuditSection::new(
        SectionKind::Notebook,
        vec![CheckOutcome::skipped(
            NOTEBOOK_PACKAGE.display_name,
            "interpreter unavailable",
        )],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::report::CheckStatus;
    use std::collections::HashSet;

    fn output(success: bool, stdout: &str, stderr: &str) -> SnippetOutput {
        SnippetOutput {
            success,
            stdout: stdout.to_string(),
            stderr: stderr.to_string(),
        }
    }

    #[test]
    fn table_has_ten_entries_with_distinct_import_names() {
        assert_eq!(REQUIRED_PACKAGES.len(), 10);
        let names: HashSet<_> = REQUIRED_PACKAGES.iter().map(|s| s.import_name).collect();
        assert_eq!(names.len(), REQUIRED_PACKAGES.len());
    }

    #[test]
    fn sklearn_and_imblearn_remap_display_names() {
        let sklearn = REQUIRED_PACKAGES
            .iter()
            .find(|s| s.import_name == "sklearn")
            .unwrap();
        assert_eq!(sklearn.display_name, "scikit-learn");

        let imblearn = REQUIRED_PACKAGES
            .iter()
            .find(|s| s.import_name == "imblearn")
            .unwrap();
        assert_eq!(imblearn.display_name, "imbalanced-learn");
    }

    #[test]
    fn min_versions_are_dotted_strings() {
        for spec in REQUIRED_PACKAGES {
            let min = spec.min_version.unwrap();
            assert!(
                min.split('.').count() == 3 && min.split('.').all(|p| p.parse::<u32>().is_ok()),
                "bad min version for {}: {}",
                spec.import_name,
                min
            );
        }
    }

    #[test]
    fn probe_snippet_imports_and_reads_version() {
        let snippet = probe_snippet("numpy");
        assert!(snippet.contains("import numpy"));
        assert!(snippet.contains("__version__"));
        assert!(snippet.contains("getattr"));
    }

    #[test]
    fn installed_with_version_passes() {
        let outcome = classify(&REQUIRED_PACKAGES[0], &output(true, "1.26.0\n", ""));
        assert_eq!(outcome.status, CheckStatus::Pass);
        assert_eq!(outcome.detail.as_deref(), Some("v1.26.0"));
    }

    #[test]
    fn installed_without_version_warns() {
        let outcome = classify(&REQUIRED_PACKAGES[0], &output(true, "\n", ""));
        assert_eq!(outcome.status, CheckStatus::Warn);
        assert_eq!(outcome.detail.as_deref(), Some("version unknown"));
    }

    #[test]
    fn import_failure_fails_with_min_version_hint() {
        let shap = REQUIRED_PACKAGES
            .iter()
            .find(|s| s.import_name == "shap")
            .unwrap();
        let outcome = classify(shap, &output(false, "", "ModuleNotFoundError: ..."));
        assert_eq!(outcome.status, CheckStatus::Fail);
        assert!(outcome.detail.as_deref().unwrap().contains(">= 0.42.0"));
    }

    #[test]
    fn notebook_failure_has_no_version_hint() {
        let outcome = classify(&NOTEBOOK_PACKAGE, &output(false, "", ""));
        assert_eq!(outcome.status, CheckStatus::Fail);
        assert_eq!(outcome.detail.as_deref(), Some("not installed"));
    }

    #[test]
    fn skipped_sections_cover_every_package() {
        let section = skipped_required();
        assert_eq!(section.outcomes.len(), REQUIRED_PACKAGES.len());
        assert!(section
            .outcomes
            .iter()
            .all(|o| o.status == CheckStatus::Skipped));
        assert!(!section.has_failure());

        let notebook = skipped_notebook();
        assert_eq!(notebook.outcomes.len(), 1);
        assert_eq!(notebook.outcomes[0].status, CheckStatus::Skipped);
    }
}
