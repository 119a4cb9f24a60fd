//! Error types for labcheck operations.
//!
//! This module defines [`LabcheckError`], the primary error type used
//! throughout the application, and a [`Result`] type alias for convenience.
//!
//! Most check failures are not errors: a missing package or folder is
//! recorded as an outcome in the audit report and the run continues.
//! `LabcheckError` covers the cases where the tool itself cannot proceed.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for labcheck operations.
#[derive(Debug, Error)]
pub enum LabcheckError {
    /// The requested project root does not exist or is not a directory.
    #[error("Project root not found: {path}")]
    ProjectRootNotFound { path: PathBuf },

    /// An unrecognized output format was requested.
    #[error("Unknown output format '{format}' (expected: human, json)")]
    UnknownFormat { format: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for labcheck operations.
pub type Result<T> = std::result::Result<T, LabcheckError>;
