//! The `projspec:` URI codec.
//!
//! A report is addressed as `projspec:<absolute-path>`. The path component
//! is carried verbatim with no escaping, and the codec round-trips every
//! valid absolute path: `parse(uri.to_string()) == uri`.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use super::error::ReportError;

/// The fixed private scheme that distinguishes report URIs from files.
pub const SCHEME: &str = "projspec";

/// A validated report identifier: the `projspec` scheme plus an absolute
/// project path.
///
/// Values are only constructible through [`ReportUri::for_path`] and
/// [`ReportUri::parse`], so holding one means both invariants hold: the
/// scheme is `projspec` and the path is absolute and non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ReportUri {
    path: PathBuf,
}

impl ReportUri {
    /// Build a URI addressing the report for `path`.
    ///
    /// Rejects empty and relative paths instead of producing a garbage
    /// identifier.
    pub fn for_path(path: impl Into<PathBuf>) -> Result<Self, ReportError> {
        let path = path.into();
        if path.as_os_str().is_empty() {
            return Err(ReportError::invalid_path("", "path is empty"));
        }
        if !path.is_absolute() {
            return Err(ReportError::invalid_path(
                path.display().to_string(),
                "path is not absolute",
            ));
        }
        Ok(Self { path })
    }

    /// Parse the textual form `projspec:<absolute-path>`.
    ///
    /// Anything that does not start with the scheme prefix, or whose path
    /// component is not a valid absolute path, is rejected with
    /// [`ReportError::MalformedUri`].
    pub fn parse(text: &str) -> Result<Self, ReportError> {
        let Some(rest) = text.strip_prefix(SCHEME).and_then(|r| r.strip_prefix(':')) else {
            return Err(ReportError::malformed(format!(
                "'{text}' does not start with '{SCHEME}:'"
            )));
        };

        Self::for_path(rest)
            .map_err(|_| ReportError::malformed(format!("'{text}' carries no absolute path")))
    }

    /// The project directory this URI addresses.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl fmt::Display for ReportUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{SCHEME}:{}", self.path.display())
    }
}

impl FromStr for ReportUri {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        for path in [
            "/",
            "/home/user/code",
            "/Users/m durant/code/projspec",
            "/weird/$(rm)/path",
            "/trailing/slash/",
        ] {
            let uri = ReportUri::for_path(path).unwrap();
            let reparsed = ReportUri::parse(&uri.to_string()).unwrap();
            assert_eq!(reparsed, uri, "round trip failed for {path}");
            assert_eq!(reparsed.path(), Path::new(path));
        }
    }

    #[test]
    fn test_textual_form() {
        let uri = ReportUri::for_path("/home/user/code").unwrap();
        assert_eq!(uri.to_string(), "projspec:/home/user/code");
    }

    #[test]
    fn test_rejects_relative_path() {
        assert!(matches!(
            ReportUri::for_path("code/projspec"),
            Err(ReportError::InvalidPath { .. })
        ));
    }

    #[test]
    fn test_rejects_empty_path() {
        assert!(matches!(
            ReportUri::for_path(""),
            Err(ReportError::InvalidPath { .. })
        ));
    }

    #[test]
    fn test_rejects_wrong_scheme() {
        for text in ["file:/home/user", "projspe:/home", "/home/user", ""] {
            assert!(
                matches!(ReportUri::parse(text), Err(ReportError::MalformedUri(_))),
                "accepted {text:?}"
            );
        }
    }

    #[test]
    fn test_rejects_scheme_with_relative_path() {
        assert!(matches!(
            ReportUri::parse("projspec:code/projspec"),
            Err(ReportError::MalformedUri(_))
        ));
    }

    #[test]
    fn test_from_str() {
        let uri: ReportUri = "projspec:/srv/app".parse().unwrap();
        assert_eq!(uri.path(), Path::new("/srv/app"));
    }
}
