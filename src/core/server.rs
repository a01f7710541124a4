//! MCP Server implementation and lifecycle management.
//!
//! This module contains the main server handler that implements the MCP
//! protocol by delegating to domain-specific services: reports are served
//! as resources under the `projspec:` scheme, and the scan command is
//! exposed as a tool.
//!
//! The ToolRouter is built dynamically in `domains/tools/router.rs`.
//! **Adding a new tool does NOT require modifying this file!**

use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler, handler::server::tool::ToolRouter, model::*,
    service::RequestContext, tool_handler,
};
use std::sync::Arc;
use tracing::{info, instrument};

use super::config::Config;
use crate::core::scanner::{SharedScanRunner, production_runner};
use crate::domains::{
    reports::{ReportError, ReportProvider, ReportService},
    tools::build_tool_router,
};

/// The main MCP server handler.
///
/// This struct implements the `ServerHandler` trait from rmcp and coordinates
/// between different domain services to handle MCP protocol messages.
#[derive(Clone)]
pub struct ReportServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Service for handling report resource requests.
    report_service: Arc<ReportService>,

    /// Tool router for handling tool calls.
    tool_router: ToolRouter<Self>,
}

impl ReportServer {
    /// Create a new MCP server with the given configuration, invoking the
    /// real analyzer binary.
    pub fn new(config: Config) -> Self {
        Self::with_runner(config, production_runner())
    }

    /// Create a server over an explicit scan runner.
    ///
    /// The seam for tests: substitute a mock runner and no child process
    /// is ever spawned.
    pub fn with_runner(config: Config, runner: SharedScanRunner) -> Self {
        let config = Arc::new(config);

        let provider = Arc::new(ReportProvider::new(config.scanner.clone(), runner));
        let report_service = Arc::new(ReportService::new(provider.clone()));

        Self {
            tool_router: build_tool_router::<Self>(config.clone(), provider),
            config,
            report_service,
        }
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Get the server configuration (for tool access).
    pub fn config(&self) -> &Arc<Config> {
        &self.config
    }

    /// Map a report error onto the protocol error space.
    fn map_report_error(e: ReportError) -> McpError {
        match e {
            ReportError::MalformedUri(_) | ReportError::InvalidPath { .. } => {
                McpError::invalid_params(e.to_string(), None)
            }
            ReportError::Scan(_) | ReportError::Internal(_) => {
                McpError::internal_error(e.to_string(), None)
            }
        }
    }
}

/// ServerHandler implementation with tool_handler macro for automatic tool routing.
#[tool_handler]
impl ServerHandler for ReportServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Exposes projspec analysis reports. Read a 'projspec:<absolute-path>' \
                 resource for the raw report, or call scan_project for a rendered HTML panel."
                    .to_string(),
            ),
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_resources()
                .build(),
            ..Default::default()
        }
    }

    #[instrument(skip(self, _context))]
    async fn list_resources(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourcesResult, McpError> {
        info!("Listing resources");
        let resources = self.report_service.list_resources().await;
        Ok(ListResourcesResult {
            resources,
            next_cursor: None,
            meta: None,
        })
    }

    #[instrument(skip(self, _context))]
    async fn list_resource_templates(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourceTemplatesResult, McpError> {
        info!("Listing resource templates");
        let templates = self.report_service.list_resource_templates().await;
        Ok(ListResourceTemplatesResult {
            resource_templates: templates,
            next_cursor: None,
            meta: None,
        })
    }

    #[instrument(skip(self, _context))]
    async fn read_resource(
        &self,
        request: ReadResourceRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<ReadResourceResult, McpError> {
        info!("Reading resource: {}", request.uri);
        self.report_service
            .read_resource(&request.uri)
            .await
            .map_err(Self::map_report_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::scanner::MockScanRunner;

    fn server_with_mock() -> (ReportServer, MockScanRunner) {
        let mock = MockScanRunner::new();
        let server = ReportServer::with_runner(Config::default(), Arc::new(mock.clone()));
        (server, mock)
    }

    #[test]
    fn test_server_identity() {
        let (server, _mock) = server_with_mock();
        assert_eq!(server.name(), "projspec-mcp-server");
        assert!(!server.version().is_empty());
    }

    #[test]
    fn test_get_info_capabilities() {
        let (server, _mock) = server_with_mock();
        let info = server.get_info();
        assert!(info.capabilities.tools.is_some());
        assert!(info.capabilities.resources.is_some());
    }

    #[test]
    fn test_malformed_uri_maps_to_invalid_params() {
        let err = ReportServer::map_report_error(ReportError::malformed("nope"));
        assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
    }
}
