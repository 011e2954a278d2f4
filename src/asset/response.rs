//! Bundle aggregation: resolve members, read them in order, concatenate.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::bundle::BundleDefinition;
use crate::core::VirtualPath;
use crate::log;

use super::minify::minify;
use super::version::{ResolveError, resolve, resolve_optimized};
use super::AssetManifest;

#[derive(Debug, Error)]
pub enum BuildError {
    #[error("bundle `{bundle}` has an unresolvable member")]
    Resolve {
        bundle: String,
        #[source]
        source: ResolveError,
    },

    #[error("failed to read `{}`", .0.display())]
    Read(PathBuf, #[source] io::Error),
}

/// Aggregated bundle ready to be written or served.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleResponse {
    pub content: String,
    pub content_type: &'static str,
    /// Resolved members, in delivery order.
    pub files: Vec<VirtualPath>,
}

/// Resolve every member of `def`. In optimized mode pre-minified siblings
/// replace their sources.
pub fn resolve_members(
    def: &BundleDefinition,
    manifest: &AssetManifest,
    optimize: bool,
) -> Result<Vec<VirtualPath>, BuildError> {
    def.members()
        .iter()
        .map(|member| {
            let resolved = if optimize {
                resolve_optimized(member, manifest)
            } else {
                resolve(member, manifest)
            };
            resolved.map_err(|source| BuildError::Resolve {
                bundle: def.name().to_string(),
                source,
            })
        })
        .collect()
}

/// Build one bundle from files under `root`.
///
/// Optimized builds are minified; if the minifier rejects the input the
/// plain concatenation is kept and a warning logged.
pub fn build_bundle(
    def: &BundleDefinition,
    manifest: &AssetManifest,
    root: &Path,
    optimize: bool,
) -> Result<BundleResponse, BuildError> {
    let files = resolve_members(def, manifest, optimize)?;

    let mut parts = Vec::with_capacity(files.len());
    for file in &files {
        let path = file.to_fs(root);
        let text = fs::read_to_string(&path).map_err(|e| BuildError::Read(path, e))?;
        parts.push(strip_bom(text));
    }
    let content = parts.join(def.kind().separator());

    let content = if optimize {
        minify(def.kind(), &content).unwrap_or_else(|| {
            log!("warning"; "could not minify {}, writing it unminified", def.name());
            content
        })
    } else {
        content
    };

    Ok(BundleResponse {
        content,
        content_type: def.kind().content_type(),
        files,
    })
}

/// Editors on some platforms save a UTF-8 BOM, which must not end up in the
/// middle of a concatenated file.
fn strip_bom(text: String) -> String {
    match text.strip_prefix('\u{feff}') {
        Some(rest) => rest.to_string(),
        None => text,
    }
}
