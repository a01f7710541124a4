//! Core module containing shared infrastructure components.
//!
//! This module provides the foundational building blocks for the MCP server,
//! including error handling, configuration, the external tool invoker,
//! server lifecycle management, and transport layer abstractions.

pub mod config;
pub mod error;
pub mod scanner;
pub mod security;
pub mod server;
pub mod transport;

pub use config::Config;
pub use error::{Error, Result};
pub use security::{PathSecurityError, validate_scan_target};
pub use server::ReportServer;
pub use transport::{TransportConfig, TransportService};
