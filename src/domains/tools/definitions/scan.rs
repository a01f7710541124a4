//! Scan project tool definition.
//!
//! The user-triggered command: given the client's open workspace directory,
//! run the analyzer and return the report as a rendered HTML panel.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Content, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{info, instrument, warn};

use crate::core::config::Config;
use crate::core::security::validate_scan_target;
use crate::domains::reports::{ReportPanel, ReportProvider};

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters for the scan project tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ScanProjectParams {
    /// Absolute path of the project directory to analyze, typically the
    /// client's open workspace folder.
    #[serde(default)]
    pub path: String,
}

// ============================================================================
// Tool Definition
// ============================================================================

/// Scan project tool - renders an analysis report panel for a directory.
pub struct ScanProjectTool;

impl ScanProjectTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "scan_project";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Run the projspec analyzer on a project directory \
        and return its report as a self-contained static HTML page titled with the path.";

    /// Execute the tool logic.
    ///
    /// Every failure comes back as a recoverable tool-call error with an
    /// explicit message; a missing workspace path is reported, not silently
    /// ignored.
    #[instrument(skip_all, fields(path = %params.path))]
    pub async fn execute(
        params: &ScanProjectParams,
        config: &Config,
        provider: &ReportProvider,
    ) -> CallToolResult {
        info!("Scan project tool called for path: {}", params.path);

        let target = match validate_scan_target(&params.path, config) {
            Ok(p) => p,
            Err(e) => {
                warn!("Scan target rejected: {}", e);
                return CallToolResult::error(vec![Content::text(format!(
                    "Cannot scan '{}': {}",
                    params.path, e
                ))]);
            }
        };

        match ReportPanel::render(provider, &target).await {
            Ok(panel) => {
                info!("Rendered report panel for {}", panel.title);
                CallToolResult::success(vec![Content::text(panel.html)])
            }
            Err(e) => {
                warn!("Report generation failed: {}", e);
                CallToolResult::error(vec![Content::text(format!(
                    "Analysis of '{}' failed: {}",
                    target.display(),
                    e
                ))])
            }
        }
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<ScanProjectParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute for the router.
    pub fn create_route<S>(config: Arc<Config>, provider: Arc<ReportProvider>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            let config = config.clone();
            let provider = provider.clone();
            async move {
                let params: ScanProjectParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&params, &config, &provider).await)
            }
            .boxed()
        })
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::scanner::MockScanRunner;
    use tempfile::TempDir;

    fn tool_fixture() -> (Config, ReportProvider, MockScanRunner) {
        let config = Config::default();
        let mock = MockScanRunner::new();
        let provider =
            ReportProvider::new(config.scanner.clone(), Arc::new(mock.clone()));
        (config, provider, mock)
    }

    fn result_text(result: &CallToolResult) -> &str {
        match &result.content[0].raw {
            rmcp::model::RawContent::Text(text) => &text.text,
            _ => panic!("Expected text content"),
        }
    }

    #[tokio::test]
    async fn test_scan_renders_panel() {
        let (config, provider, mock) = tool_fixture();
        mock.succeed_with("<p>2 environments</p>");

        let temp_dir = TempDir::new().unwrap();
        let params = ScanProjectParams {
            path: temp_dir.path().to_string_lossy().to_string(),
        };

        let result = ScanProjectTool::execute(&params, &config, &provider).await;
        assert!(result.is_error.is_none() || !result.is_error.unwrap());

        let text = result_text(&result);
        assert!(text.starts_with("<!DOCTYPE html><html><body>"));
        assert!(text.contains("<p>2 environments</p>"));
        assert_eq!(mock.call_count(), 1);
    }

    #[tokio::test]
    async fn test_missing_workspace_is_explicit_and_spawns_nothing() {
        let (config, provider, mock) = tool_fixture();
        mock.succeed_with("never used");

        let params = ScanProjectParams {
            path: String::new(),
        };

        let result = ScanProjectTool::execute(&params, &config, &provider).await;
        assert!(result.is_error.unwrap_or(false));
        assert!(result_text(&result).contains("No project directory"));
        // No panel, no invocation.
        assert_eq!(mock.call_count(), 0);
    }

    #[tokio::test]
    async fn test_scan_failure_is_recoverable_error() {
        let (config, provider, mock) = tool_fixture();
        mock.fail_with(1, "no recognizable project");

        let temp_dir = TempDir::new().unwrap();
        let params = ScanProjectParams {
            path: temp_dir.path().to_string_lossy().to_string(),
        };

        let result = ScanProjectTool::execute(&params, &config, &provider).await;
        assert!(result.is_error.unwrap_or(false));
        assert!(result_text(&result).contains("failed"));
    }

    #[tokio::test]
    async fn test_nonexistent_directory_rejected() {
        let (config, provider, mock) = tool_fixture();
        mock.succeed_with("never used");

        let params = ScanProjectParams {
            path: "/nonexistent/path/12345".to_string(),
        };

        let result = ScanProjectTool::execute(&params, &config, &provider).await;
        assert!(result.is_error.unwrap_or(false));
        assert_eq!(mock.call_count(), 0);
    }
}
