//! Reports domain module.
//!
//! This module turns project directories into readable analysis reports.
//! A directory is addressed by a `projspec:` URI; reading that URI runs the
//! external analyzer and returns its output. Nothing is cached: every read
//! is a fresh invocation.
//!
//! ## Architecture
//!
//! - `uri.rs` - the `projspec:` URI codec
//! - `provider.rs` - the content provider (decode, invoke, label)
//! - `html.rs` - the static HTML panel adapter
//! - `registry.rs` - resource template registration
//! - `service.rs` - the MCP resource surface

mod error;
pub mod html;
mod provider;
mod registry;
mod service;
pub mod uri;

pub use error::ReportError;
pub use html::{ReportPanel, wrap_document};
pub use provider::{ReportContent, ReportProvider};
pub use registry::report_templates;
pub use service::ReportService;
pub use uri::ReportUri;
