//! Static HTML panel adapter.
//!
//! Wraps report content in a minimal document shell suitable for a
//! non-interactive view panel: no scripts, no styles, no external
//! resource references.

use std::path::Path;

use super::error::ReportError;
use super::provider::ReportProvider;
use super::uri::ReportUri;

/// Enclose `body` in the fixed document shell.
pub fn wrap_document(body: &str) -> String {
    format!("<!DOCTYPE html><html><body>{body}</body></html>")
}

/// A one-shot rendered panel: a title (the project path) and a complete
/// HTML document.
///
/// The adapter holds no state and performs no retries; redisplaying a
/// panel means rendering a fresh one.
#[derive(Debug, Clone)]
pub struct ReportPanel {
    /// Panel title, the original project path.
    pub title: String,

    /// The full document markup.
    pub html: String,
}

impl ReportPanel {
    /// Render the report panel for `path`.
    ///
    /// Builds the identifier, obtains content from the provider, and wraps
    /// it in the document shell.
    pub async fn render(provider: &ReportProvider, path: &Path) -> Result<Self, ReportError> {
        let uri = ReportUri::for_path(path)?;
        let content = provider.provide(&uri).await?;

        Ok(Self {
            title: path.display().to_string(),
            html: wrap_document(&content.body),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::ScannerConfig;
    use crate::core::scanner::MockScanRunner;
    use std::sync::Arc;

    #[test]
    fn test_shell_shape() {
        let html = wrap_document("report text");
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert_eq!(html, "<!DOCTYPE html><html><body>report text</body></html>");
    }

    #[test]
    fn test_shell_shape_is_payload_independent() {
        // One root/body boundary regardless of what the payload contains.
        for body in ["", "plain", "<body>nested</body>", "a\nb\nc"] {
            let html = wrap_document(body);
            assert!(html.starts_with("<!DOCTYPE html><html><body>"));
            assert!(html.ends_with("</body></html>"));
        }
    }

    #[tokio::test]
    async fn test_render_titles_panel_with_path() {
        let mock = MockScanRunner::new();
        mock.succeed_with("<p>ok</p>");
        let provider =
            ReportProvider::new(ScannerConfig::default(), Arc::new(mock.clone()));

        let panel = ReportPanel::render(&provider, Path::new("/proj/a"))
            .await
            .unwrap();

        assert_eq!(panel.title, "/proj/a");
        assert!(panel.html.contains("<p>ok</p>"));
        assert!(panel.html.starts_with("<!DOCTYPE html>"));
        assert_eq!(mock.call_count(), 1);
    }

    #[tokio::test]
    async fn test_render_propagates_failure() {
        let mock = MockScanRunner::new();
        mock.fail_with(3, "scan blew up");
        let provider = ReportProvider::new(ScannerConfig::default(), Arc::new(mock));

        let err = ReportPanel::render(&provider, Path::new("/proj/a"))
            .await
            .unwrap_err();
        assert!(matches!(err, ReportError::Scan(_)));
    }
}
