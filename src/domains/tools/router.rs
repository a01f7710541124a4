//! Tool Router - builds the rmcp ToolRouter.
//!
//! This module builds the ToolRouter by delegating to the tool definitions
//! themselves. Each tool knows how to create its own route.

use std::sync::Arc;

use rmcp::handler::server::tool::ToolRouter;

use crate::core::config::Config;
use crate::domains::reports::ReportProvider;

use super::definitions::ScanProjectTool;

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(config: Arc<Config>, provider: Arc<ReportProvider>) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolRouter::new().with_route(ScanProjectTool::create_route(config, provider))
}
