//! Labcheck - preflight audit of a Python data-analysis environment.
//!
//! Labcheck checks that a machine has the Python interpreter, libraries,
//! and directory layout a data-analysis project expects, then prints a
//! checklist and a ready/incomplete verdict. It never mutates the
//! workspace it audits.
//!
//! # Modules
//!
//! - [`audit`] - The checks themselves and the structured report they produce
//! - [`cli`] - Command-line interface and argument parsing
//! - [`error`] - Error types and result aliases
//! - [`python`] - Interpreter discovery and `python -c` snippet execution
//! - [`report`] - Rendering of audit reports (human-readable and JSON)
//!
//! # Example
//!
//! ```no_run
//! use labcheck::audit::Auditor;
//!
//! let report = Auditor::new(std::path::Path::new(".")).run();
//! if report.is_ready() {
//!     println!("environment ready");
//! }
//! ```

pub mod audit;
pub mod cli;
pub mod error;
pub mod python;
pub mod report;

pub use error::{LabcheckError, Result};
