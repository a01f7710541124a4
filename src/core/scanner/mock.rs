//! Scripted scan runner for tests.

use async_trait::async_trait;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use super::command::ScanCommand;
use super::error::ScanError;
use super::runner::{ScanOutput, ScanRunner};

/// A [`ScanRunner`] that never touches the operating system.
///
/// Responses are scripted per target (or for any target) and every call is
/// recorded, so tests can assert exactly how many invocations a code path
/// produced and with which arguments.
#[derive(Clone, Default)]
pub struct MockScanRunner {
    responses: Arc<Mutex<Vec<ScriptedResponse>>>,
    calls: Arc<Mutex<Vec<ScanCommand>>>,
}

struct ScriptedResponse {
    /// `None` matches any target.
    target: Option<PathBuf>,
    result: ScriptedResult,
}

enum ScriptedResult {
    Stdout(String),
    Fail { code: i32, stderr: String },
    NotInstalled,
    TimeOut(Duration),
}

impl MockScanRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Script a successful run (any target) returning `stdout`.
    pub fn succeed_with(&self, stdout: &str) {
        self.push(None, ScriptedResult::Stdout(stdout.to_string()));
    }

    /// Script a successful run for one specific target.
    pub fn succeed_for(&self, target: impl Into<PathBuf>, stdout: &str) {
        self.push(
            Some(target.into()),
            ScriptedResult::Stdout(stdout.to_string()),
        );
    }

    /// Script a non-zero exit (any target).
    pub fn fail_with(&self, code: i32, stderr: &str) {
        self.push(
            None,
            ScriptedResult::Fail {
                code,
                stderr: stderr.to_string(),
            },
        );
    }

    /// Script a missing-binary failure (any target).
    pub fn tool_missing(&self) {
        self.push(None, ScriptedResult::NotInstalled);
    }

    /// Script a timeout (any target).
    pub fn time_out(&self, after: Duration) {
        self.push(None, ScriptedResult::TimeOut(after));
    }

    fn push(&self, target: Option<PathBuf>, result: ScriptedResult) {
        self.responses
            .lock()
            .unwrap()
            .push(ScriptedResponse { target, result });
    }

    /// Every command this runner has been asked to execute, in order.
    pub fn calls(&self) -> Vec<ScanCommand> {
        self.calls.lock().unwrap().clone()
    }

    /// Total number of invocations.
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Number of invocations for one target path.
    pub fn calls_for(&self, target: impl Into<PathBuf>) -> usize {
        let target = target.into();
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|cmd| cmd.target() == target)
            .count()
    }
}

#[async_trait]
impl ScanRunner for MockScanRunner {
    async fn run(&self, command: ScanCommand) -> Result<ScanOutput, ScanError> {
        self.calls.lock().unwrap().push(command.clone());

        let responses = self.responses.lock().unwrap();
        let matched = responses.iter().find(|r| match &r.target {
            Some(target) => target == command.target(),
            None => true,
        });

        match matched.map(|r| &r.result) {
            Some(ScriptedResult::Stdout(stdout)) => Ok(ScanOutput {
                stdout: stdout.clone(),
                stderr: String::new(),
                duration: Duration::from_millis(1),
            }),
            Some(ScriptedResult::Fail { code, stderr }) => Err(ScanError::ScanFailed {
                code: *code,
                stderr: stderr.clone(),
            }),
            Some(ScriptedResult::NotInstalled) => {
                Err(ScanError::ToolNotInstalled(command.program().to_string()))
            }
            Some(ScriptedResult::TimeOut(after)) => Err(ScanError::Timeout(*after)),
            None => Err(ScanError::ScanFailed {
                code: -1,
                stderr: format!("no scripted response for target {:?}", command.target()),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_records_calls_per_target() {
        let mock = MockScanRunner::new();
        mock.succeed_with("<p>report</p>");

        let a = ScanCommand::new("projspec", "/proj/a");
        let b = ScanCommand::new("projspec", "/proj/b");
        mock.run(a.clone()).await.unwrap();
        mock.run(a).await.unwrap();
        mock.run(b).await.unwrap();

        assert_eq!(mock.call_count(), 3);
        assert_eq!(mock.calls_for("/proj/a"), 2);
        assert_eq!(mock.calls_for("/proj/b"), 1);
    }

    #[tokio::test]
    async fn test_mock_target_specific_response_wins() {
        let mock = MockScanRunner::new();
        mock.succeed_for("/proj/a", "report for a");

        let hit = mock.run(ScanCommand::new("projspec", "/proj/a")).await;
        assert_eq!(hit.unwrap().stdout, "report for a");

        let miss = mock.run(ScanCommand::new("projspec", "/proj/b")).await;
        assert!(miss.is_err());
    }

    #[tokio::test]
    async fn test_mock_scripted_failure() {
        let mock = MockScanRunner::new();
        mock.fail_with(2, "no project found");

        let err = mock
            .run(ScanCommand::new("projspec", "/proj/a"))
            .await
            .unwrap_err();
        match err {
            ScanError::ScanFailed { code, stderr } => {
                assert_eq!(code, 2);
                assert_eq!(stderr, "no project found");
            }
            other => panic!("expected ScanFailed, got {other:?}"),
        }
    }
}
