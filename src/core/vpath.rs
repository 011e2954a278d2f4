//! Application-relative virtual paths (`~/Content/Site.css`).
//!
//! Bundle names and bundle members are both written as virtual paths. The
//! `~/` prefix stands for the application root, so a single value maps to
//! both a public URL and a file under the root directory:
//!
//! ```text
//! ~/bundle/bootstrap-styles  → /bundle/bootstrap-styles
//! ~/Content/Site.css         → <root>/Content/Site.css
//! ```

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;

/// Rejected virtual path with the reason it was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("`{path}` is not a valid virtual path: {reason}")]
pub struct InvalidVirtualPath {
    pub path: String,
    pub reason: &'static str,
}

/// Validated `~/`-prefixed path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct VirtualPath(String);

impl VirtualPath {
    pub const PREFIX: &'static str = "~/";

    /// Parse and validate a virtual path.
    pub fn parse(raw: impl Into<String>) -> Result<Self, InvalidVirtualPath> {
        let raw = raw.into();
        let invalid = |reason| InvalidVirtualPath {
            path: raw.clone(),
            reason,
        };

        let Some(rest) = raw.strip_prefix(Self::PREFIX) else {
            return Err(invalid("must start with `~/`"));
        };
        if rest.is_empty() {
            return Err(invalid("path is empty after `~/`"));
        }
        if rest.contains('\\') {
            return Err(invalid("use `/` as separator"));
        }
        for segment in rest.split('/') {
            match segment {
                "" => return Err(invalid("empty path segment")),
                "." | ".." => return Err(invalid("relative segments are not allowed")),
                _ => {}
            }
        }

        Ok(Self(raw))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Path below the application root, without the `~/` prefix.
    #[inline]
    pub fn relative(&self) -> &str {
        &self.0[Self::PREFIX.len()..]
    }

    /// Public URL (`~/a/b` → `/a/b`).
    pub fn url(&self) -> String {
        format!("/{}", self.relative())
    }

    /// Directory part of the relative path (`Scripts` for `~/Scripts/a.js`).
    pub fn dir(&self) -> &str {
        self.relative()
            .rsplit_once('/')
            .map(|(dir, _)| dir)
            .unwrap_or("")
    }

    /// Last path segment (`a.js` for `~/Scripts/a.js`).
    pub fn file_name(&self) -> &str {
        self.relative()
            .rsplit_once('/')
            .map(|(_, name)| name)
            .unwrap_or(self.relative())
    }

    /// Location of this path under `root` on disk.
    pub fn to_fs(&self, root: &Path) -> PathBuf {
        self.relative()
            .split('/')
            .fold(root.to_path_buf(), |path, segment| path.join(segment))
    }
}

impl fmt::Display for VirtualPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for VirtualPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid() {
        let path = VirtualPath::parse("~/Content/Site.css").unwrap();
        assert_eq!(path.as_str(), "~/Content/Site.css");
        assert_eq!(path.relative(), "Content/Site.css");
        assert_eq!(path.url(), "/Content/Site.css");
        assert_eq!(path.dir(), "Content");
        assert_eq!(path.file_name(), "Site.css");
    }

    #[test]
    fn test_parse_nested_name() {
        let path = VirtualPath::parse("~/bundle/Home/Index-styles").unwrap();
        assert_eq!(path.url(), "/bundle/Home/Index-styles");
        assert_eq!(path.dir(), "bundle/Home");
    }

    #[test]
    fn test_parse_root_file() {
        let path = VirtualPath::parse("~/app.js").unwrap();
        assert_eq!(path.dir(), "");
        assert_eq!(path.file_name(), "app.js");
    }

    #[test]
    fn test_parse_rejects() {
        for raw in [
            "Content/Site.css",
            "/Content/Site.css",
            "~/",
            "~/Content//Site.css",
            "~/Content/../secret.css",
            "~/Content\\Site.css",
        ] {
            assert!(VirtualPath::parse(raw).is_err(), "accepted {raw}");
        }
    }

    #[test]
    fn test_invalid_message_names_path() {
        let err = VirtualPath::parse("Site.css").unwrap_err();
        let message = err.to_string();
        assert!(message.contains("Site.css"));
        assert!(message.contains("~/"));
    }

    #[test]
    fn test_to_fs() {
        let path = VirtualPath::parse("~/Scripts/lib/app.js").unwrap();
        let fs_path = path.to_fs(Path::new("/srv/site"));
        assert_eq!(fs_path, Path::new("/srv/site").join("Scripts").join("lib").join("app.js"));
    }
}
