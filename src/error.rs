//! Error types for the dupsweep CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.
//!
//! Recoverable conditions (a target that is already gone, a directory that is
//! still non-empty) are not errors at all; they are reported as outcomes by
//! the run command. Everything here is fatal for the current run.

use crate::exit_codes;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for dupsweep operations.
///
/// Each variant maps to a specific exit code.
#[derive(Error, Debug)]
pub enum SweepError {
    /// User provided invalid arguments or the manifest is missing/invalid.
    #[error("{0}")]
    UserError(String),

    /// Manifest could not be read or parsed.
    #[error("manifest error: {0}")]
    ManifestError(String),

    /// A deletion failed for a reason other than not-found or not-empty.
    /// Fatal: aborts the run at the offending target.
    #[error("failed to remove '{path}': {source}")]
    RemovalError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl SweepError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            SweepError::UserError(_) => exit_codes::USER_ERROR,
            SweepError::ManifestError(_) => exit_codes::USER_ERROR,
            SweepError::RemovalError { .. } => exit_codes::CLEANUP_FAILURE,
        }
    }
}

/// Result type alias for dupsweep operations.
pub type Result<T> = std::result::Result<T, SweepError>;
