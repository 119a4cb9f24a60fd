//! Python interpreter discovery and snippet execution.
//!
//! The audit never imports Python code itself; every package and
//! capability probe is a short `python -c` snippet run against a
//! discovered interpreter. Discovery walks PATH directly rather than
//! shelling out to `which` — `which` behavior varies across systems and
//! is sometimes a shell builtin with inconsistent error handling.

use std::path::{Path, PathBuf};
use std::process::Command;

/// Interpreter names tried on PATH, in order, when none is given explicitly.
const CANDIDATE_NAMES: &[&str] = &["python3", "python"];

/// A located Python interpreter.
#[derive(Debug, Clone)]
pub struct Interpreter {
    path: PathBuf,
}

/// Captured result of running a `python -c` snippet.
///
/// A spawn failure (interpreter vanished between discovery and use) is
/// folded into an unsuccessful output with the OS error as stderr, so
/// callers classify it the same way as a snippet that raised.
#[derive(Debug, Clone)]
pub struct SnippetOutput {
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

impl SnippetOutput {
    /// First line of stdout, trimmed. Empty output yields `None`.
    pub fn stdout_line(&self) -> Option<&str> {
        self.stdout.lines().map(str::trim).find(|l| !l.is_empty())
    }

    /// Last non-empty line of stderr, trimmed.
    ///
    /// For a Python traceback this is the `SomeError: message` line,
    /// which is the part worth surfacing to the user.
    pub fn error_line(&self) -> Option<&str> {
        self.stderr
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .next_back()
    }
}

impl Interpreter {
    /// Discover an interpreter.
    ///
    /// With an explicit path, it is used iff it exists as an executable
    /// file; no PATH fallback happens in that case. Otherwise each
    /// candidate name is resolved against PATH in order.
    pub fn discover(explicit: Option<&Path>) -> Option<Interpreter> {
        if let Some(path) = explicit {
            if path.is_file() && is_executable(path) {
                tracing::debug!("using explicit interpreter at {}", path.display());
                return Some(Interpreter {
                    path: path.to_path_buf(),
                });
            }
            tracing::debug!("explicit interpreter {} not usable", path.display());
            return None;
        }

        let path_entries = parse_system_path();
        for name in CANDIDATE_NAMES {
            if let Some(found) = resolve_tool_path(name, &path_entries) {
                tracing::debug!("resolved {} to {}", name, found.display());
                return Some(Interpreter { path: found });
            }
        }
        None
    }

    /// Path to the interpreter binary.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Run a Python snippet via `-c`, capturing stdout and stderr.
    pub fn run_snippet(&self, snippet: &str) -> SnippetOutput {
        match Command::new(&self.path).args(["-c", snippet]).output() {
            Ok(output) => SnippetOutput {
                success: output.status.success(),
                stdout: String::from_utf8_lossy(&output.stdout).to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            },
            Err(e) => SnippetOutput {
                success: false,
                stdout: String::new(),
                stderr: format!("failed to run {}: {}", self.path.display(), e),
            },
        }
    }
}

/// Check whether a file has executable permission bits set.
#[cfg(unix)]
pub fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

/// On Windows, executability is determined by file extension, not permission bits.
#[cfg(not(unix))]
pub fn is_executable(_path: &Path) -> bool {
    true
}

/// Resolve a tool's binary path by iterating over PATH entries.
///
/// Returns the first match that exists and is executable.
pub fn resolve_tool_path(tool: &str, path_entries: &[PathBuf]) -> Option<PathBuf> {
    for dir in path_entries {
        let candidate = dir.join(tool);
        if candidate.is_file() && is_executable(&candidate) {
            return Some(candidate);
        }
    }
    None
}

/// Parse the system PATH environment variable into a list of directories.
pub fn parse_system_path() -> Vec<PathBuf> {
    std::env::var_os("PATH")
        .map(|path| std::env::split_paths(&path).collect())
        .unwrap_or_default()
}
