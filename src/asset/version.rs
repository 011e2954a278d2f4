//! `{version}` wildcard resolution.
//!
//! Members like `~/Scripts/jquery-{version}.js` name whatever version of a
//! package is installed. Resolution is a pure function of the pattern and
//! an [`AssetManifest`]:
//!
//! ```text
//! ~/Scripts/jquery-{version}.js + {Scripts/jquery-1.10.2.js} → ~/Scripts/jquery-1.10.2.js
//! ```

use std::cmp::Ordering;
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::core::VirtualPath;

use super::AssetManifest;

pub const VERSION_PLACEHOLDER: &str = "{version}";

/// Matches what `{version}` may stand for: 2 to 4 numeric parts and an
/// optional prerelease tag (`1.10.2`, `2.6.2`, `3.0.0-beta1`).
const VERSION_PATTERN: &str = r"[0-9]+(?:\.[0-9]+){1,3}(?:-[a-z][0-9a-z-]*)?";

/// Editor helper files that sit next to real scripts and are never served.
const IGNORED_SUFFIXES: &[&str] = &["-vsdoc.js", ".intellisense.js"];

static VERSION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("^{VERSION_PATTERN}$")).expect("version pattern is a valid regex")
});

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    #[error("asset `{0}` does not exist")]
    Missing(String),

    #[error("no installed file matches `{0}`")]
    NoVersionMatch(String),

    #[error("`{0}` contains more than one `{{version}}` placeholder")]
    MultiplePlaceholders(String),
}

// ============================================================================
// AssetVersion
// ============================================================================

/// Parsed version. Numeric parts compare numerically with missing parts as
/// zero; a release sorts above any prerelease of the same number.
#[derive(Debug, Clone)]
pub struct AssetVersion {
    parts: Vec<u64>,
    pre: Option<String>,
}

impl AssetVersion {
    pub fn parse(raw: &str) -> Option<Self> {
        if !VERSION_RE.is_match(raw) {
            return None;
        }
        let (numbers, pre) = match raw.split_once('-') {
            Some((numbers, pre)) => (numbers, Some(pre.to_string())),
            None => (raw, None),
        };
        let parts = numbers
            .split('.')
            .map(str::parse)
            .collect::<Result<Vec<u64>, _>>()
            .ok()?;
        Some(Self { parts, pre })
    }
}

impl Ord for AssetVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        let len = self.parts.len().max(other.parts.len());
        for i in 0..len {
            let a = self.parts.get(i).copied().unwrap_or(0);
            let b = other.parts.get(i).copied().unwrap_or(0);
            match a.cmp(&b) {
                Ordering::Equal => {}
                ord => return ord,
            }
        }
        match (&self.pre, &other.pre) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Greater,
            (Some(_), None) => Ordering::Less,
            (Some(a), Some(b)) => compare_prerelease(a, b),
        }
    }
}

/// Compare prerelease tags chunk by chunk, digit runs numerically
/// (`beta2 < beta10`).
fn compare_prerelease(a: &str, b: &str) -> Ordering {
    let (mut a, mut b) = (chunks(a), chunks(b));
    loop {
        match (a.next(), b.next()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) => {
                let ord = match (is_digits(x), is_digits(y)) {
                    (true, true) => compare_numeric(x, y),
                    _ => x.cmp(y),
                };
                if ord != Ordering::Equal {
                    return ord;
                }
            }
        }
    }
}

/// Split into alternating runs of ASCII digits and non-digits.
fn chunks(s: &str) -> impl Iterator<Item = &str> {
    let mut rest = s;
    std::iter::from_fn(move || {
        let first = rest.chars().next()?;
        let digit = first.is_ascii_digit();
        let end = rest
            .find(|c: char| c.is_ascii_digit() != digit)
            .unwrap_or(rest.len());
        let (chunk, tail) = rest.split_at(end);
        rest = tail;
        Some(chunk)
    })
}

fn is_digits(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_digit())
}

/// Numeric comparison of digit strings of any length.
fn compare_numeric(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

impl PartialEq for AssetVersion {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for AssetVersion {}

impl PartialOrd for AssetVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve a member pattern against installed files.
///
/// Without a placeholder the file itself must be installed. With one, the
/// highest matching version in the pattern's directory wins.
pub fn resolve(pattern: &VirtualPath, manifest: &AssetManifest) -> Result<VirtualPath, ResolveError> {
    let file_pattern = pattern.file_name();
    match file_pattern.matches(VERSION_PLACEHOLDER).count() {
        0 => {
            if manifest.contains(pattern.relative()) {
                Ok(pattern.clone())
            } else {
                Err(ResolveError::Missing(pattern.to_string()))
            }
        }
        1 => resolve_versioned(pattern, file_pattern, manifest),
        _ => Err(ResolveError::MultiplePlaceholders(pattern.to_string())),
    }
}

/// Resolve, then swap in a pre-minified sibling (`a.min.js` for `a.js`)
/// when one is installed.
pub fn resolve_optimized(
    pattern: &VirtualPath,
    manifest: &AssetManifest,
) -> Result<VirtualPath, ResolveError> {
    let resolved = resolve(pattern, manifest)?;
    Ok(minified_sibling(&resolved, manifest).unwrap_or(resolved))
}

/// `true` for `*.min.js` / `*.min.css`.
pub fn is_minified(file_name: &str) -> bool {
    file_name
        .rsplit_once('.')
        .is_some_and(|(stem, _)| stem.ends_with(".min"))
}

fn minified_sibling(path: &VirtualPath, manifest: &AssetManifest) -> Option<VirtualPath> {
    let name = path.file_name();
    if is_minified(name) {
        return None;
    }
    let (stem, ext) = name.rsplit_once('.')?;
    let candidate = match path.dir() {
        "" => format!("{stem}.min.{ext}"),
        dir => format!("{dir}/{stem}.min.{ext}"),
    };
    if !manifest.contains(&candidate) {
        return None;
    }
    VirtualPath::parse(format!("{}{candidate}", VirtualPath::PREFIX)).ok()
}

fn resolve_versioned(
    pattern: &VirtualPath,
    file_pattern: &str,
    manifest: &AssetManifest,
) -> Result<VirtualPath, ResolveError> {
    let (prefix, suffix) = file_pattern
        .split_once(VERSION_PLACEHOLDER)
        .unwrap_or((file_pattern, ""));
    let re = Regex::new(&format!(
        "^{}({VERSION_PATTERN}){}$",
        regex::escape(prefix),
        regex::escape(suffix)
    ))
    .map_err(|_| ResolveError::NoVersionMatch(pattern.to_string()))?;

    let dir = pattern.dir();
    let best = manifest
        .files_in(dir)
        .filter(|name| !IGNORED_SUFFIXES.iter().any(|s| name.ends_with(s)))
        .filter(|name| !is_minified(name))
        .filter_map(|name| {
            let captures = re.captures(name)?;
            let version = AssetVersion::parse(captures.get(1)?.as_str())?;
            Some((version, name))
        })
        .max_by(|(a, _), (b, _)| a.cmp(b))
        .map(|(_, name)| name)
        .ok_or_else(|| ResolveError::NoVersionMatch(pattern.to_string()))?;

    let resolved = match dir {
        "" => format!("{}{best}", VirtualPath::PREFIX),
        dir => format!("{}{dir}/{best}", VirtualPath::PREFIX),
    };
    VirtualPath::parse(resolved).map_err(|_| ResolveError::NoVersionMatch(pattern.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vp(raw: &str) -> VirtualPath {
        VirtualPath::parse(raw).unwrap()
    }

    fn manifest(files: &[&str]) -> AssetManifest {
        files.iter().copied().collect()
    }

    #[test]
    fn test_version_ordering() {
        let v = |s: &str| AssetVersion::parse(s).unwrap();
        assert!(v("1.10.2") > v("1.9.1"));
        assert!(v("2.0") == v("2.0.0"));
        assert!(v("3.0.0") > v("3.0.0-beta1"));
        assert!(v("3.0.0-rc1") > v("3.0.0-beta1"));
        assert!(v("1.0.0-beta10") > v("1.0.0-beta2"));
        assert!(v("1.0.0-rc1") > v("1.0.0-beta10"));
        assert!(v("1.0.0-beta") < v("1.0.0-beta1"));
        assert!(AssetVersion::parse("1").is_none());
        assert!(AssetVersion::parse("1.2.3.4.5").is_none());
    }

    #[test]
    fn test_version_pattern_compiles_without_unicode_classes() {
        assert!(LazyLock::force(&VERSION_RE).is_match("1.0.0-beta10"));
        assert!(AssetVersion::parse("2.6.2").is_some());
    }

    #[test]
    fn test_resolve_prerelease_numeric_order() {
        let m = manifest(&["Scripts/lib-1.0.0-beta2.js", "Scripts/lib-1.0.0-beta10.js"]);
        assert_eq!(
            resolve(&vp("~/Scripts/lib-{version}.js"), &m).unwrap(),
            vp("~/Scripts/lib-1.0.0-beta10.js")
        );
    }

    #[test]
    fn test_resolve_plain_path() {
        let m = manifest(&["Scripts/bootstrap.js"]);
        assert_eq!(resolve(&vp("~/Scripts/bootstrap.js"), &m).unwrap(), vp("~/Scripts/bootstrap.js"));
    }

    #[test]
    fn test_resolve_missing_is_error() {
        let m = manifest(&["Scripts/bootstrap.js"]);
        assert_eq!(
            resolve(&vp("~/Scripts/bootstarp.js"), &m),
            Err(ResolveError::Missing("~/Scripts/bootstarp.js".into()))
        );
    }

    #[test]
    fn test_resolve_version() {
        let m = manifest(&[
            "Scripts/jquery-1.10.2.js",
            "Scripts/jquery-1.10.2.min.js",
            "Scripts/jquery-1.10.2-vsdoc.js",
            "Scripts/jquery-1.10.2.intellisense.js",
            "Scripts/jquery.validate.js",
            "Scripts/modernizr-2.6.2.js",
        ]);
        assert_eq!(
            resolve(&vp("~/Scripts/jquery-{version}.js"), &m).unwrap(),
            vp("~/Scripts/jquery-1.10.2.js")
        );
        assert_eq!(
            resolve(&vp("~/Scripts/modernizr-{version}.js"), &m).unwrap(),
            vp("~/Scripts/modernizr-2.6.2.js")
        );
    }

    #[test]
    fn test_resolve_picks_highest_version() {
        let m = manifest(&[
            "Scripts/jquery-1.9.1.js",
            "Scripts/jquery-1.10.2.js",
            "Scripts/jquery-2.0.0-beta1.js",
            "Scripts/jquery-1.10.2-rc1.js",
        ]);
        assert_eq!(
            resolve(&vp("~/Scripts/jquery-{version}.js"), &m).unwrap(),
            vp("~/Scripts/jquery-2.0.0-beta1.js")
        );
    }

    #[test]
    fn test_resolve_version_stays_in_directory() {
        let m = manifest(&["Scripts/old/jquery-1.8.0.js"]);
        assert_eq!(
            resolve(&vp("~/Scripts/jquery-{version}.js"), &m),
            Err(ResolveError::NoVersionMatch("~/Scripts/jquery-{version}.js".into()))
        );
    }

    #[test]
    fn test_resolve_version_escapes_literal_parts() {
        // The `.` in `.js` must not match any character.
        let m = manifest(&["Scripts/jquery-1.10.2xjs"]);
        assert!(resolve(&vp("~/Scripts/jquery-{version}.js"), &m).is_err());
    }

    #[test]
    fn test_multiple_placeholders() {
        let m = manifest(&[]);
        assert!(matches!(
            resolve(&vp("~/Scripts/a-{version}-{version}.js"), &m),
            Err(ResolveError::MultiplePlaceholders(_))
        ));
    }

    #[test]
    fn test_resolve_optimized_prefers_min() {
        let m = manifest(&[
            "Scripts/bootstrap.js",
            "Scripts/bootstrap.min.js",
            "Scripts/jquery-1.10.2.js",
            "Scripts/jquery-1.10.2.min.js",
            "Content/Site.css",
        ]);
        assert_eq!(
            resolve_optimized(&vp("~/Scripts/bootstrap.js"), &m).unwrap(),
            vp("~/Scripts/bootstrap.min.js")
        );
        assert_eq!(
            resolve_optimized(&vp("~/Scripts/jquery-{version}.js"), &m).unwrap(),
            vp("~/Scripts/jquery-1.10.2.min.js")
        );
        assert_eq!(
            resolve_optimized(&vp("~/Content/Site.css"), &m).unwrap(),
            vp("~/Content/Site.css")
        );
    }

    #[test]
    fn test_is_minified() {
        assert!(is_minified("a.min.js"));
        assert!(is_minified("bootstrap.min.css"));
        assert!(!is_minified("a.js"));
        assert!(!is_minified("min.js"));
    }
}
