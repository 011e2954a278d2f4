//! HTML tags referencing a bundle.

use thiserror::Error;

use crate::bundle::{BundleError, BundleKind, BundleTable};
use crate::core::VirtualPath;

use super::version::{ResolveError, resolve};
use super::AssetManifest;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error(transparent)]
    Bundle(#[from] BundleError),

    #[error(transparent)]
    Resolve(#[from] ResolveError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    /// One tag pointing at the built bundle file.
    Optimized,
    /// One tag per member, for readable sources while developing.
    Debug,
}

/// Render the tags for bundle `name`, one per line.
pub fn render_tags(
    table: &BundleTable,
    name: &str,
    manifest: &AssetManifest,
    mode: RenderMode,
) -> Result<String, RenderError> {
    let def = table.require(name)?;
    let urls = match mode {
        RenderMode::Optimized => vec![format!("/{}", def.output_file())],
        RenderMode::Debug => def
            .members()
            .iter()
            .map(|member| resolve(member, manifest).map(|path| VirtualPath::url(&path)))
            .collect::<Result<Vec<_>, _>>()?,
    };

    let tags: Vec<String> = urls.iter().map(|url| tag(def.kind(), url)).collect();
    Ok(tags.join("\n"))
}

fn tag(kind: BundleKind, url: &str) -> String {
    let url = escape_attr(url);
    match kind {
        BundleKind::Style => format!(r#"<link href="{url}" rel="stylesheet"/>"#),
        BundleKind::Script => format!(r#"<script src="{url}"></script>"#),
    }
}

fn escape_attr(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
}
