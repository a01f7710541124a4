//! projspec MCP Server Library
//!
//! This crate provides a Model Context Protocol (MCP) server that turns the
//! external `projspec` command-line analyzer into addressable virtual
//! resources. A project directory is encoded as a `projspec:` URI; reading
//! that URI invokes the tool and returns its report, and a `scan_project`
//! tool wraps the same report in a static HTML panel.
//!
//! # Architecture
//!
//! The server is organized into the following modules:
//!
//! - **core**: Core infrastructure including configuration, error handling,
//!   the external tool invoker, and the main server
//! - **domains**: Business logic organized by bounded contexts
//!   - **reports**: the `projspec:` URI codec, the report content provider,
//!     and the HTML render adapter
//!   - **tools**: MCP tools that can be executed by clients
//!
//! # Example
//!
//! ```rust,no_run
//! use projspec_mcp_server::{core::ReportServer, core::Config};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = ReportServer::new(config);
//!     // Start the server...
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, ReportServer, Result};
