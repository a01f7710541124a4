//! Scan command construction.

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::core::config::ScannerConfig;

/// Command-line flag that asks the analyzer for HTML report output.
pub const HTML_OUT_FLAG: &str = "--html-out";

/// A fully described analyzer invocation: which binary to run, which
/// directory to analyze, and how long to wait for it.
///
/// The target path is always passed to the process-spawn primitive as a
/// single discrete argument. It is never interpolated into a shell string,
/// so paths containing shell metacharacters cannot change the command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanCommand {
    program: String,
    target: PathBuf,
    timeout: Option<Duration>,
}

impl ScanCommand {
    /// Create a command invoking `program` on `target`.
    pub fn new(program: impl Into<String>, target: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            target: target.into(),
            timeout: None,
        }
    }

    /// Create a command for `target` using the configured binary and timeout.
    pub fn from_config(config: &ScannerConfig, target: impl Into<PathBuf>) -> Self {
        Self::new(config.tool.clone(), target).with_timeout(config.timeout())
    }

    /// Bound the invocation to the given duration.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// The analyzer binary name or path.
    pub fn program(&self) -> &str {
        &self.program
    }

    /// The directory the analyzer is pointed at.
    pub fn target(&self) -> &Path {
        &self.target
    }

    /// The invocation time bound, if any.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// The argument vector, with the target path as one opaque element.
    pub fn args(&self) -> [OsString; 2] {
        [
            OsString::from(HTML_OUT_FLAG),
            self.target.clone().into_os_string(),
        ]
    }
}
