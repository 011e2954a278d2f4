//! `render` command: print tags referencing a bundle.

use anyhow::Result;

use crate::app::Application;
use crate::asset::{AssetManifest, RenderMode, render_tags};
use crate::config::AppConfig;

pub fn render_bundle(app: &Application, config: &AppConfig, name: &str, debug: bool) -> Result<()> {
    let build = &config.build;
    let mode = if debug {
        RenderMode::Debug
    } else {
        RenderMode::Optimized
    };
    let manifest = match mode {
        RenderMode::Debug => AssetManifest::scan(&build.root, std::slice::from_ref(&build.output)),
        RenderMode::Optimized => AssetManifest::default(),
    };
    println!("{}", render_tags(app.bundles(), name, &manifest, mode)?);
    Ok(())
}
