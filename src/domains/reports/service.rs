//! Report service implementation.
//!
//! The ReportService adapts the [`ReportProvider`] to the MCP resource
//! surface: it lists the report template and handles read requests for
//! `projspec:` URIs.

use rmcp::model::{ReadResourceResult, Resource, ResourceContents, ResourceTemplate};
use std::sync::Arc;
use tracing::info;

use super::error::ReportError;
use super::provider::ReportProvider;
use super::registry::report_templates;
use super::uri::ReportUri;

/// Service exposing reports as MCP resources.
pub struct ReportService {
    /// The content provider for report URIs.
    provider: Arc<ReportProvider>,

    /// Resource templates for parameterized resources.
    templates: Vec<ResourceTemplate>,
}

impl ReportService {
    /// Create a new ReportService over the given provider.
    pub fn new(provider: Arc<ReportProvider>) -> Self {
        info!("Initializing ReportService");

        Self {
            provider,
            templates: report_templates(),
        }
    }

    /// The provider handle, for callers that bypass the resource surface.
    pub fn provider(&self) -> &Arc<ReportProvider> {
        &self.provider
    }

    /// List all concrete resources.
    ///
    /// Reports are generated on demand and never cached, so there are no
    /// concrete resources to enumerate - only the template.
    pub async fn list_resources(&self) -> Vec<Resource> {
        Vec::new()
    }

    /// List all available resource templates.
    pub async fn list_resource_templates(&self) -> Vec<ResourceTemplate> {
        self.templates.clone()
    }

    /// Read a resource by URI.
    ///
    /// The URI must carry the `projspec:` scheme; anything else is rejected
    /// as malformed instead of being sliced into a corrupted path.
    pub async fn read_resource(&self, uri: &str) -> Result<ReadResourceResult, ReportError> {
        let report_uri = ReportUri::parse(uri)?;
        let content = self.provider.provide(&report_uri).await?;

        Ok(ReadResourceResult {
            contents: vec![ResourceContents::text(content.body, uri)],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::ScannerConfig;
    use crate::core::scanner::MockScanRunner;

    fn service_with_mock() -> (ReportService, MockScanRunner) {
        let mock = MockScanRunner::new();
        let provider = Arc::new(ReportProvider::new(
            ScannerConfig::default(),
            Arc::new(mock.clone()),
        ));
        (ReportService::new(provider), mock)
    }

    #[tokio::test]
    async fn test_read_report_resource() {
        let (service, mock) = service_with_mock();
        mock.succeed_with("the report");

        let result = service.read_resource("projspec:/proj/a").await.unwrap();
        assert_eq!(result.contents.len(), 1);
        match &result.contents[0] {
            ResourceContents::TextResourceContents { text, uri, .. } => {
                assert!(text.contains("the report"));
                assert_eq!(uri, "projspec:/proj/a");
            }
            other => panic!("expected text contents, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_read_rejects_foreign_scheme() {
        let (service, mock) = service_with_mock();
        mock.succeed_with("never used");

        let err = service.read_resource("file:///proj/a").await.unwrap_err();
        assert!(matches!(err, ReportError::MalformedUri(_)));
        // A rejected identifier must not trigger an invocation.
        assert_eq!(mock.call_count(), 0);
    }

    #[tokio::test]
    async fn test_read_surfaces_scan_failure() {
        let (service, mock) = service_with_mock();
        mock.fail_with(1, "bad project");

        let err = service.read_resource("projspec:/proj/a").await.unwrap_err();
        assert!(matches!(err, ReportError::Scan(_)));
    }

    #[tokio::test]
    async fn test_template_listed() {
        let (service, _mock) = service_with_mock();
        let templates = service.list_resource_templates().await;
        assert_eq!(templates.len(), 1);
        assert_eq!(templates[0].raw.uri_template, "projspec:{path}");
    }

    #[tokio::test]
    async fn test_no_concrete_resources() {
        let (service, _mock) = service_with_mock();
        assert!(service.list_resources().await.is_empty());
    }
}
