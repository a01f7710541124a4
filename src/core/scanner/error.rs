//! Scanner error types.

use std::time::Duration;
use thiserror::Error;

/// Errors that can occur while invoking the external analyzer.
///
/// "The binary is not installed" and "the tool reported an error" are
/// deliberately separate variants so callers can give users actionable
/// messages for each.
#[derive(Debug, Error)]
pub enum ScanError {
    /// The analyzer binary could not be found on this system.
    #[error("Analyzer '{0}' is not installed or not on PATH")]
    ToolNotInstalled(String),

    /// The process could not be spawned for a reason other than a missing
    /// binary (permissions, resource limits, ...).
    #[error("Failed to spawn '{tool}': {source}")]
    Spawn {
        tool: String,
        #[source]
        source: std::io::Error,
    },

    /// The analyzer ran but exited with a non-zero status.
    #[error("Analyzer exited with code {code}: {stderr}")]
    ScanFailed { code: i32, stderr: String },

    /// The analyzer was terminated by a signal.
    #[error("Analyzer terminated by signal {0}")]
    Signal(i32),

    /// The invocation exceeded its time bound.
    #[error("Analyzer timed out after {0:?}")]
    Timeout(Duration),

    /// I/O failure while collecting the process output.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The analyzer produced report output that is not valid UTF-8.
    #[error("Analyzer output is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

impl ScanError {
    /// Whether the failure means the tool is missing rather than unhappy.
    pub fn is_not_installed(&self) -> bool {
        matches!(self, Self::ToolNotInstalled(_))
    }
}
