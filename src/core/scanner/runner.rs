//! Scan runner trait and its tokio-backed production implementation.

use async_trait::async_trait;
use std::process::Stdio;
use std::time::{Duration, Instant};

use super::command::ScanCommand;
use super::error::ScanError;

/// Captured output of a successful analyzer run.
///
/// Created once per invocation and consumed immediately by the caller;
/// nothing here is cached between requests.
#[derive(Debug, Clone)]
pub struct ScanOutput {
    /// The report payload, exactly as the tool wrote it to stdout.
    pub stdout: String,

    /// Diagnostic output, kept for logging even on success.
    pub stderr: String,

    /// Wall-clock time the invocation took.
    pub duration: Duration,
}

/// Executes scan commands.
///
/// The trait is the seam between report generation and the operating
/// system: production code uses [`TokioScanRunner`], tests substitute
/// [`super::MockScanRunner`].
#[async_trait]
pub trait ScanRunner: Send + Sync {
    /// Run the analyzer to completion and capture its output.
    ///
    /// Returns an error for every failure mode: missing binary, spawn
    /// failure, non-zero exit, signal, timeout, or undecodable output.
    /// A completed run with exit code 0 is the only success.
    async fn run(&self, command: ScanCommand) -> Result<ScanOutput, ScanError>;
}

/// Production runner backed by `tokio::process`.
///
/// The invocation is an awaited task, never a blocking call, so the
/// calling task's thread stays free while the analyzer works. Dropping
/// the future kills the child process, which is how an abandoned request
/// cancels its invocation.
pub struct TokioScanRunner;

#[async_trait]
impl ScanRunner for TokioScanRunner {
    async fn run(&self, command: ScanCommand) -> Result<ScanOutput, ScanError> {
        tracing::debug!(
            "Invoking analyzer: {} {:?}",
            command.program(),
            command.target()
        );

        let mut cmd = tokio::process::Command::new(command.program());
        cmd.args(command.args())
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        let started = Instant::now();

        let child = cmd.spawn().map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ScanError::ToolNotInstalled(command.program().to_string())
            } else {
                ScanError::Spawn {
                    tool: command.program().to_string(),
                    source: e,
                }
            }
        })?;

        let output = Self::wait_with_timeout(child, command.timeout()).await?;
        let duration = started.elapsed();

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).to_string();
            tracing::warn!(
                "Analyzer failed for {:?} after {:?}: {}",
                command.target(),
                duration,
                stderr.trim()
            );
            return Err(Self::failure_from_status(output.status, stderr));
        }

        // The report payload must survive byte-for-byte, so reject rather
        // than lossily rewrite output that is not UTF-8.
        let stdout = String::from_utf8(output.stdout)?;
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();

        tracing::debug!(
            "Analyzer finished for {:?} in {:?} ({} bytes)",
            command.target(),
            duration,
            stdout.len()
        );

        Ok(ScanOutput {
            stdout,
            stderr,
            duration,
        })
    }
}

impl TokioScanRunner {
    /// Wait for the child, enforcing the command's time bound if present.
    async fn wait_with_timeout(
        child: tokio::process::Child,
        timeout: Option<Duration>,
    ) -> Result<std::process::Output, ScanError> {
        match timeout {
            Some(duration) => match tokio::time::timeout(duration, child.wait_with_output()).await
            {
                Ok(result) => result.map_err(ScanError::Io),
                // kill_on_drop reaps the child once the timeout fires
                Err(_) => Err(ScanError::Timeout(duration)),
            },
            None => child.wait_with_output().await.map_err(ScanError::Io),
        }
    }

    /// Map a non-success exit status to the matching error variant.
    fn failure_from_status(status: std::process::ExitStatus, stderr: String) -> ScanError {
        if let Some(code) = status.code() {
            return ScanError::ScanFailed { code, stderr };
        }
        Self::signal_error(status, stderr)
    }

    #[cfg(unix)]
    fn signal_error(status: std::process::ExitStatus, stderr: String) -> ScanError {
        use std::os::unix::process::ExitStatusExt;
        match status.signal() {
            Some(signal) => ScanError::Signal(signal),
            None => ScanError::ScanFailed { code: -1, stderr },
        }
    }

    #[cfg(not(unix))]
    fn signal_error(_status: std::process::ExitStatus, stderr: String) -> ScanError {
        ScanError::ScanFailed { code: -1, stderr }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // These tests use common POSIX binaries as stand-ins for the analyzer;
    // the runner itself is tool-agnostic.

    #[tokio::test]
    async fn test_run_captures_stdout() {
        // `echo` ignores the scan arguments and prints them back.
        let cmd = ScanCommand::new("echo", "/some/project");
        let output = TokioScanRunner.run(cmd).await.unwrap();
        assert!(output.stdout.contains("/some/project"));
    }

    #[tokio::test]
    async fn test_missing_binary_is_distinct() {
        let cmd = ScanCommand::new("definitely-not-a-real-binary-xyz", "/p");
        let err = TokioScanRunner.run(cmd).await.unwrap_err();
        assert!(err.is_not_installed(), "got {err:?}");
    }

    #[tokio::test]
    async fn test_nonzero_exit_is_scan_failed() {
        let cmd = ScanCommand::new("false", "/p");
        let err = TokioScanRunner.run(cmd).await.unwrap_err();
        match err {
            ScanError::ScanFailed { code, .. } => assert_ne!(code, 0),
            other => panic!("expected ScanFailed, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_timeout_enforced() {
        // Spawn a long sleeper directly; the fixed --html-out argv shape
        // would make `sleep` bail out before the timeout could fire.
        let child = tokio::process::Command::new("sleep")
            .arg("30")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .kill_on_drop(true)
            .spawn()
            .unwrap();
        let err =
            TokioScanRunner::wait_with_timeout(child, Some(Duration::from_millis(50)))
                .await
                .unwrap_err();
        match err {
            ScanError::Timeout(d) => assert_eq!(d, Duration::from_millis(50)),
            other => panic!("expected Timeout, got {other:?}"),
        }
    }
}
