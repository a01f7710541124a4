//! Report-specific error types.

use thiserror::Error;

use crate::core::scanner::ScanError;

/// Errors that can occur while producing a report.
#[derive(Debug, Error)]
pub enum ReportError {
    /// The identifier does not carry the `projspec:` scheme or carries a
    /// path the codec refuses. Never produces a corrupted path silently.
    #[error("Malformed report URI: {0}")]
    MalformedUri(String),

    /// A path that cannot address a report (empty or relative).
    #[error("Invalid report path '{path}': {reason}")]
    InvalidPath { path: String, reason: String },

    /// The external analyzer failed; carries the distinct failure kind.
    #[error(transparent)]
    Scan(#[from] ScanError),

    /// An internal error occurred.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ReportError {
    /// Create a new "malformed URI" error.
    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::MalformedUri(msg.into())
    }

    /// Create a new "invalid path" error.
    pub fn invalid_path(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidPath {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a new "internal" error.
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}
