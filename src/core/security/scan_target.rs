use std::io;
use std::path::{Path, PathBuf};

use crate::core::config::Config;

/// Errors that can occur during scan target validation
#[derive(Debug, thiserror::Error)]
pub enum PathSecurityError {
    #[error("No project directory was provided")]
    EmptyPath,

    #[error("Path '{path}' is not absolute")]
    NotAbsolute { path: PathBuf },

    #[error("Path '{path}' is not a directory")]
    NotADirectory { path: PathBuf },

    #[error("Path '{path}' is outside allowed root directory '{root}'")]
    OutsideRootDirectory { path: PathBuf, root: PathBuf },

    #[error("Cannot canonicalize path '{path}': {error}")]
    CannotCanonicalize { path: PathBuf, error: io::Error },

    #[error("Path does not exist: '{path}'")]
    PathNotFound { path: PathBuf },

    #[error("IO error for path '{path}': {error}")]
    IoError { path: PathBuf, error: io::Error },
}

/// Validates that a path may be handed to the analyzer.
///
/// This function performs the following checks:
/// 1. Rejects empty and relative paths outright
/// 2. Canonicalizes the path to resolve `.`, `..`, and symlinks
/// 3. Requires the target to be an existing directory
/// 4. If a root path is configured, ensures the canonical path is within
///    that root
///
/// # Arguments
///
/// * `input_path` - The requested project directory
/// * `config` - The server configuration containing security settings
///
/// # Returns
///
/// * `Ok(PathBuf)` - The canonicalized, validated directory
/// * `Err(PathSecurityError)` - If validation fails
pub fn validate_scan_target(
    input_path: &str,
    config: &Config,
) -> Result<PathBuf, PathSecurityError> {
    if input_path.trim().is_empty() {
        return Err(PathSecurityError::EmptyPath);
    }

    let path = Path::new(input_path);
    if !path.is_absolute() {
        return Err(PathSecurityError::NotAbsolute {
            path: path.to_path_buf(),
        });
    }

    let canonical = canonicalize_path(path)?;

    if !canonical.is_dir() {
        return Err(PathSecurityError::NotADirectory { path: canonical });
    }

    if let Some(ref root) = config.security.root_path {
        let canonical_root =
            root.canonicalize()
                .map_err(|e| PathSecurityError::IoError {
                    path: root.clone(),
                    error: e,
                })?;

        if !canonical.starts_with(&canonical_root) {
            return Err(PathSecurityError::OutsideRootDirectory {
                path: canonical,
                root: canonical_root,
            });
        }
    }

    Ok(canonical)
}

fn canonicalize_path(path: &Path) -> Result<PathBuf, PathSecurityError> {
    if !path.exists() {
        return Err(PathSecurityError::PathNotFound {
            path: path.to_path_buf(),
        });
    }

    path.canonicalize()
        .map_err(|e| PathSecurityError::CannotCanonicalize {
            path: path.to_path_buf(),
            error: e,
        })
}
