//! Installed asset files under the application root.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use jwalk::WalkDir;

/// Set of files available to bundles, as `/`-separated paths relative to
/// the application root (`Scripts/jquery-1.10.2.js`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssetManifest {
    files: BTreeSet<String>,
}

impl AssetManifest {
    /// Walk `root` and record every regular file, skipping any path under
    /// one of `skip` (typically the output directory).
    pub fn scan(root: &Path, skip: &[PathBuf]) -> Self {
        WalkDir::new(root)
            .into_iter()
            .filter_map(Result::ok)
            .filter(|e| e.file_type().is_file())
            .map(|e| e.path())
            .filter(|path| !skip.iter().any(|dir| path.starts_with(dir)))
            .filter_map(|path| relative_key(root, &path))
            .collect()
    }

    #[inline]
    pub fn contains(&self, relative: &str) -> bool {
        self.files.contains(relative)
    }

    /// File names directly inside `dir` (`""` for the root).
    pub fn files_in<'a>(&'a self, dir: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        let prefix = if dir.is_empty() {
            String::new()
        } else {
            format!("{dir}/")
        };
        self.files
            .range(prefix.clone()..)
            .take_while(move |file| file.starts_with(&prefix))
            .filter_map(move |file| {
                let name = &file[if dir.is_empty() { 0 } else { dir.len() + 1 }..];
                (!name.contains('/')).then_some(name)
            })
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }
}

impl<S: Into<String>> FromIterator<S> for AssetManifest {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            files: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// `root/Scripts/a.js` → `Scripts/a.js`. Non UTF-8 paths are dropped since
/// virtual paths cannot name them.
fn relative_key(root: &Path, path: &Path) -> Option<String> {
    let rel = path.strip_prefix(root).ok()?;
    let parts = rel
        .components()
        .map(|c| c.as_os_str().to_str())
        .collect::<Option<Vec<_>>>()?;
    Some(parts.join("/"))
}
