//! Transport layer for the MCP server.
//!
//! Reports are served over **STDIO** (standard input/output), the standard
//! MCP mode: the host editor spawns this server and talks JSON-RPC over the
//! process's stdin/stdout. The transport handles the connection lifecycle
//! and delegates message processing to the MCP server handler.

mod config;
mod error;
mod service;
pub mod stdio;

pub use config::TransportConfig;
pub use error::{TransportError, TransportResult};
pub use service::TransportService;
