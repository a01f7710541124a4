//! Configuration management for the MCP server.
//!
//! This module provides a centralized configuration structure that can be
//! populated from environment variables, configuration files, or defaults.

use super::transport::TransportConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;
use tracing::{info, warn};

/// Main configuration structure for the MCP server.
///
/// This struct contains all configurable aspects of the server, organized
/// by domain for clarity and maintainability.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// External analyzer invocation configuration.
    pub scanner: ScannerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,

    /// Security and path validation configuration.
    pub security: SecurityConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Configuration for the external analyzer invocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScannerConfig {
    /// Name or path of the analyzer binary.
    pub tool: String,

    /// Upper bound on a single analyzer run, in seconds.
    pub timeout_secs: u64,
}

impl ScannerConfig {
    /// The scan timeout as a [`Duration`].
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,

    /// Whether to include timestamps in log output.
    pub with_timestamps: bool,
}

/// Configuration for security and path validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecurityConfig {
    /// Optional root directory for scan targets.
    /// If None, any existing directory may be scanned.
    /// If set, scan targets must resolve to paths inside this root.
    pub root_path: Option<PathBuf>,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            tool: "projspec".to_string(),
            timeout_secs: 60,
        }
    }
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            // No root path restriction by default
            root_path: None,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "projspec-mcp-server".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            scanner: ScannerConfig::default(),
            logging: LoggingConfig {
                level: "info".to_string(),
                with_timestamps: true,
            },
            transport: TransportConfig::default(),
            security: SecurityConfig::default(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// Environment variables are expected to be prefixed with `PROJSPEC_`.
    /// For example: `PROJSPEC_SERVER_NAME`, `PROJSPEC_LOG_LEVEL`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("PROJSPEC_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("PROJSPEC_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Ok(tool) = std::env::var("PROJSPEC_TOOL") {
            info!("Analyzer binary overridden: {}", tool);
            config.scanner.tool = tool;
        }

        if let Ok(timeout) = std::env::var("PROJSPEC_SCAN_TIMEOUT") {
            match timeout.parse() {
                Ok(secs) => config.scanner.timeout_secs = secs,
                Err(_) => warn!(
                    "Ignoring unparseable PROJSPEC_SCAN_TIMEOUT value: {}",
                    timeout
                ),
            }
        }

        // Load transport configuration from environment
        config.transport = TransportConfig::from_env();

        // Load security configuration
        if let Ok(root_path) = std::env::var("PROJSPEC_ROOT_PATH") {
            config.security.root_path = Some(PathBuf::from(root_path));
            info!(
                "Path security enabled: root directory set to {:?}",
                config.security.root_path
            );
        } else {
            warn!(
                "PROJSPEC_ROOT_PATH not set - no path restrictions active. \
                 Any directory may be scanned."
            );
        }

        config
    }
}
