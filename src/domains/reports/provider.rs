//! Report content provider.
//!
//! The provider is the one place that turns an identifier into content:
//! decode the URI, invoke the analyzer, label the output. It is an explicit
//! service struct constructed once at startup and shared by handle; there
//! is no hidden singleton state.

use chrono::{DateTime, Utc};
use tokio::sync::broadcast;
use tracing::{info, instrument};

use super::error::ReportError;
use super::uri::ReportUri;
use crate::core::config::ScannerConfig;
use crate::core::scanner::{ScanCommand, SharedScanRunner};

/// Capacity of the change-notification channel. Invalidation traffic is
/// rare, so a small buffer is plenty.
const CHANGE_CHANNEL_CAPACITY: usize = 16;

/// A generated report, owned exclusively by the caller that requested it.
#[derive(Debug, Clone)]
pub struct ReportContent {
    /// The identifier this content answers.
    pub uri: ReportUri,

    /// The analyzer's stdout, prefixed with the source path for
    /// traceability.
    pub body: String,

    /// When the analyzer run finished.
    pub generated_at: DateTime<Utc>,
}

/// On-demand report generator with a change-notification channel.
///
/// Content is never cached: two calls for the same URI mean two analyzer
/// invocations, each owning its own child process. Failures are local to
/// the request that hit them.
pub struct ReportProvider {
    scanner: ScannerConfig,
    runner: SharedScanRunner,
    changes: broadcast::Sender<ReportUri>,
}

impl ReportProvider {
    /// Create a provider using the given scanner configuration and runner.
    pub fn new(scanner: ScannerConfig, runner: SharedScanRunner) -> Self {
        info!("Initializing ReportProvider (tool: {})", scanner.tool);
        let (changes, _) = broadcast::channel(CHANGE_CHANNEL_CAPACITY);
        Self {
            scanner,
            runner,
            changes,
        }
    }

    /// Generate the report addressed by `uri`.
    ///
    /// Always re-derives the content; on any analyzer failure the error is
    /// returned to the caller rather than surfacing as empty content.
    #[instrument(skip(self), fields(uri = %uri))]
    pub async fn provide(&self, uri: &ReportUri) -> Result<ReportContent, ReportError> {
        let command = ScanCommand::from_config(&self.scanner, uri.path());
        let output = self.runner.run(command).await?;

        info!(
            "Report generated for {} in {:?} ({} bytes)",
            uri,
            output.duration,
            output.stdout.len()
        );

        Ok(ReportContent {
            uri: uri.clone(),
            body: format!("{}\n{}", uri.path().display(), output.stdout),
            generated_at: Utc::now(),
        })
    }

    /// Subscribe to change notifications for this provider.
    ///
    /// Receivers learn which identifiers should be treated as stale. The
    /// serving path never announces anything today - content is regenerated
    /// on every read - but the channel is part of the provider contract so
    /// hosts that require one get a valid (quiet) stream.
    pub fn subscribe(&self) -> broadcast::Receiver<ReportUri> {
        self.changes.subscribe()
    }

    /// Announce that the content behind `uri` may have changed.
    pub fn announce_change(&self, uri: &ReportUri) {
        // Send only fails when there are no subscribers, which is fine.
        let _ = self.changes.send(uri.clone());
    }
}
