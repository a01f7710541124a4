//! Security utilities for the MCP server.
//!
//! This module provides validation of scan target paths before they are
//! handed to the external analyzer.

mod scan_target;

pub use scan_target::{PathSecurityError, validate_scan_target};
