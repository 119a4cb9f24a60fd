//! Interpreter version check.
//!
//! The first audit section: is a Python interpreter available, and is it
//! recent enough for the analysis stack. An interpreter that is merely
//! too old is advisory — the finding is shown but the verdict is
//! unaffected, since the rest of the audit still answers the real
//! question of what is installed. Only a missing or unusable interpreter
//! fails the section; that case also makes the auditor skip the
//! sections that need one.

use std::path::Path;

use crate::audit::report::{AuditSection, CheckOutcome, SectionKind};
use crate::python::Interpreter;

/// Minimum interpreter version the analysis stack expects.
pub const MIN_PYTHON: (u32, u32, u32) = (3, 8, 0);

/// Snippet printing the running version as `MAJOR.MINOR.MICRO`.
const VERSION_SNIPPET: &str = r#"import sys; print("%d.%d.%d" % sys.version_info[:3])"#;

/// Run the interpreter section.
///
/// `requested` is the explicit `--python` path, if any; it only shapes
/// the failure message when no interpreter is usable.
pub fn check(interpreter: Option<&Interpreter>, requested: Option<&Path>) -> AuditSection {
    let outcome = match interpreter {
        None => {
            let detail = match requested {
                Some(path) => format!("not an executable file: {}", path.display()),
                None => "no python3 or python on PATH".to_string(),
            };
            CheckOutcome::fail("Python", detail)
        }
        Some(py) => probe_version(py),
    };
    AuditSection::new(SectionKind::Interpreter, vec![outcome])
}

fn probe_version(py: &Interpreter) -> CheckOutcome {
    let output = py.run_snippet(VERSION_SNIPPET);
    if !output.success {
        let detail = output
            .error_line()
            .unwrap_or("interpreter did not report a version")
            .to_string();
        return CheckOutcome::fail("Python", detail);
    }

    let Some(version) = output.stdout_line().and_then(parse_version) else {
        let reported = output.stdout_line().unwrap_or("<empty>").to_string();
        return CheckOutcome::fail("Python", format!("unrecognized version output: {reported}"));
    };

    tracing::debug!("interpreter reports {}.{}.{}", version.0, version.1, version.2);
    let label = format!("Python {}.{}.{}", version.0, version.1, version.2);
    if meets_minimum(version) {
        CheckOutcome::pass(label)
    } else {
        // Advisory only: an old interpreter is flagged but does not fail
        // the audit, since the remaining sections still report usefully.
        let (maj, min, _) = MIN_PYTHON;
        CheckOutcome::warn(label, format!("{maj}.{min} or newer required"))
    }
}

/// Extract a dotted version triple from interpreter output.
pub fn parse_version(output: &str) -> Option<(u32, u32, u32)> {
    let re = regex::Regex::new(r"(\d+)\.(\d+)\.(\d+)").ok()?;
    let caps = re.captures(output)?;
    let part = |i| caps.get(i).and_then(|m| m.as_str().parse().ok());
    Some((part(1)?, part(2)?, part(3)?))
}

/// Tuple ordering gives numeric comparison per component.
pub fn meets_minimum(version: (u32, u32, u32)) -> bool {
    version >= MIN_PYTHON
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::report::CheckStatus;

    #[test]
    fn parses_plain_triple() {
        assert_eq!(parse_version("3.11.4"), Some((3, 11, 4)));
    }

    #[test]
    fn parses_triple_embedded_in_text() {
        assert_eq!(parse_version("Python 3.8.10\n"), Some((3, 8, 10)));
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(parse_version("not a version"), None);
        assert_eq!(parse_version(""), None);
    }

    #[test]
    fn minimum_boundary_is_inclusive() {
        assert!(meets_minimum((3, 8, 0)));
        assert!(!meets_minimum((3, 7, 17)));
    }

    #[test]
    fn comparison_is_numeric_not_lexicographic() {
        // "3.10" < "3.8" as strings; must compare as numbers
        assert!(meets_minimum((3, 10, 0)));
        assert!(meets_minimum((4, 0, 0)));
    }

    #[test]
    fn no_interpreter_yields_single_failure() {
        let section = check(None, None);
        assert_eq!(section.outcomes.len(), 1);
        assert_eq!(section.outcomes[0].status, CheckStatus::Fail);
        assert!(section.outcomes[0]
            .detail
            .as_deref()
            .unwrap()
            .contains("PATH"));
    }

    #[cfg(unix)]
    #[test]
    fn old_interpreter_warns_but_does_not_fail_section() {
        use crate::python::Interpreter;
        use std::fs;
        use std::os::unix::fs::PermissionsExt;
        use tempfile::TempDir;

        let temp = TempDir::new().unwrap();
        let python = temp.path().join("python3");
        fs::write(&python, "#!/bin/sh\nprintf '3.7.2\\n'\n").unwrap();
        fs::set_permissions(&python, fs::Permissions::from_mode(0o755)).unwrap();

        let py = Interpreter::discover(Some(&python)).unwrap();
        let section = check(Some(&py), Some(&python));

        assert_eq!(section.outcomes.len(), 1);
        assert_eq!(section.outcomes[0].status, CheckStatus::Warn);
        assert_eq!(section.outcomes[0].label, "Python 3.7.2");
        assert_eq!(
            section.outcomes[0].detail.as_deref(),
            Some("3.8 or newer required")
        );
        assert!(!section.has_failure());
    }

    #[test]
    fn no_interpreter_with_explicit_path_names_it() {
        let section = check(None, Some(Path::new("/opt/custom/python")));
        let detail = section.outcomes[0].detail.as_deref().unwrap();
        assert!(detail.contains("/opt/custom/python"));
    }
}
