//! `[build]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [build]
//! root = "."          # holds Content/ and Scripts/
//! output = "public"   # bundles land in public/bundle/...
//! minify = true
//! clean = false
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    /// Application root that `~/` paths resolve against.
    pub root: PathBuf,

    /// Directory receiving the aggregated bundles.
    pub output: PathBuf,

    /// Optimized mode: minify output and prefer `*.min.*` members.
    pub minify: bool,

    /// Remove the output directory before building.
    pub clean: bool,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            output: PathBuf::from("public"),
            minify: false,
            clean: false,
        }
    }
}

impl BuildConfig {
    /// Make relative paths absolute against `base`.
    pub fn normalize(&mut self, base: &Path) {
        self.root = normalize_path(base, &self.root);
        self.output = normalize_path(base, &self.output);
    }
}

/// Join `path` onto `base` and drop `.` components so that
/// `starts_with` checks between root and output behave.
pub(super) fn normalize_path(base: &Path, path: &Path) -> PathBuf {
    let joined = base.join(path);
    let mut out = PathBuf::new();
    for component in joined.components() {
        match component {
            std::path::Component::CurDir => {}
            std::path::Component::ParentDir => {
                out.pop();
            }
            other => out.push(other),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = BuildConfig::default();
        assert_eq!(config.root, PathBuf::from("."));
        assert_eq!(config.output, PathBuf::from("public"));
        assert!(!config.minify);
    }

    #[test]
    fn test_normalize() {
        let mut config = BuildConfig::default();
        config.normalize(Path::new("/srv/site"));
        assert_eq!(config.root, PathBuf::from("/srv/site"));
        assert_eq!(config.output, PathBuf::from("/srv/site/public"));
    }

    #[test]
    fn test_normalize_parent_dir() {
        let mut config = BuildConfig {
            output: PathBuf::from("../dist"),
            ..BuildConfig::default()
        };
        config.normalize(Path::new("/srv/site"));
        assert_eq!(config.output, PathBuf::from("/srv/dist"));
    }

    #[test]
    fn test_parse_partial() {
        let config: BuildConfig = toml::from_str("minify = true").unwrap();
        assert!(config.minify);
        assert_eq!(config.output, PathBuf::from("public"));
    }
}
