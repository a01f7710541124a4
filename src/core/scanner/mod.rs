//! External analyzer invocation.
//!
//! This module owns every interaction with the `projspec` binary. The rest
//! of the crate never touches a child process directly: it builds a
//! [`ScanCommand`] and hands it to a [`ScanRunner`].
//!
//! The production runner spawns the tool asynchronously with a bounded
//! timeout; [`MockScanRunner`] records calls and plays back scripted
//! outputs so callers can be tested without the binary installed.

pub mod command;
pub mod error;
pub mod mock;
pub mod runner;

pub use command::ScanCommand;
pub use error::ScanError;
pub use mock::MockScanRunner;
pub use runner::{ScanOutput, ScanRunner, TokioScanRunner};

use std::sync::Arc;

/// Shared handle to a scan runner.
///
/// Constructed once at startup and cloned into every component that needs
/// to invoke the analyzer.
pub type SharedScanRunner = Arc<dyn ScanRunner>;

/// The production runner behind a shared handle.
pub fn production_runner() -> SharedScanRunner {
    Arc::new(TokioScanRunner)
}
