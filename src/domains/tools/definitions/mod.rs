//! Tool definitions module.
//!
//! Each tool is defined in its own file with its parameter struct,
//! `execute()` logic, and route construction.

mod scan;

pub use scan::{ScanProjectParams, ScanProjectTool};
