//! `build` command: aggregate every bundle into the output directory.
//!
//! Pipeline:
//! - **Clean** - optionally wipe the output directory
//! - **Scan** - record installed assets under the application root
//! - **Bundle** - resolve, concatenate and minify bundles in parallel
//! - **Write** - `output/<bundle path>.<css|js>`

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use rayon::prelude::*;

use crate::app::Application;
use crate::asset::{AssetManifest, BundleResponse, build_bundle};
use crate::bundle::BundleDefinition;
use crate::config::AppConfig;
use crate::logger::{ProgressLine, plural};
use crate::{debug, log};

pub fn build_bundles(app: &Application, config: &AppConfig) -> Result<()> {
    let build = &config.build;

    if build.clean && build.output.exists() {
        fs::remove_dir_all(&build.output)
            .with_context(|| format!("failed to clean {}", build.output.display()))?;
    }

    let manifest = AssetManifest::scan(&build.root, std::slice::from_ref(&build.output));
    debug!("build"; "{} under {}", plural(manifest.len(), "installed asset"), build.root.display());

    let bundles: Vec<&BundleDefinition> = app.bundles().iter().collect();
    let progress = ProgressLine::new(&[("bundles", bundles.len())]);
    let results: Vec<Result<PathBuf>> = bundles
        .par_iter()
        .map(|def| {
            let result = build_one(def, &manifest, &build.root, &build.output, build.minify);
            progress.inc("bundles");
            result
        })
        .collect();
    progress.finish();

    let mut failed = 0;
    for result in results {
        match result {
            Ok(path) => debug!("build"; "{}", path.display()),
            Err(e) => {
                failed += 1;
                log!("error"; "{:#}", e);
            }
        }
    }
    if failed > 0 {
        bail!("{} failed to build", plural(failed, "bundle"));
    }

    log!(
        "build";
        "wrote {} to {}",
        plural(bundles.len(), "bundle"),
        build.output.display()
    );
    Ok(())
}

fn build_one(
    def: &BundleDefinition,
    manifest: &AssetManifest,
    root: &Path,
    output: &Path,
    optimize: bool,
) -> Result<PathBuf> {
    let response = build_bundle(def, manifest, root, optimize)?;
    debug!(
        "build";
        "{} <- {} ({})",
        def.name(),
        plural(response.files.len(), "file"),
        response.content_type
    );
    write_bundle(def, &response, output)
}

/// Write a built bundle under `output`, returning the written path.
pub fn write_bundle(
    def: &BundleDefinition,
    response: &BundleResponse,
    output: &Path,
) -> Result<PathBuf> {
    let path = def
        .output_file()
        .split('/')
        .fold(output.to_path_buf(), |path, segment| path.join(segment));
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    fs::write(&path, &response.content)
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BuildConfig;
    use tempfile::TempDir;

    fn write(root: &Path, rel: &str, content: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    fn install_assets(root: &Path) {
        for css in [
            "bootstrap.css",
            "bootstrap-theme.css",
            "Site.css",
            "StyleSheet1.css",
            "StyleSheet2.css",
            "StyleSheet3.css",
        ] {
            write(root, &format!("Content/{css}"), &format!(".{} {{ color: red; }}", css.replace('.', "-")));
        }
        for js in [
            "bootstrap.js",
            "jquery-1.10.2.js",
            "modernizr-2.6.2.js",
            "JavaScript1.js",
            "JavaScript2.js",
            "JavaScript3.js",
        ] {
            write(root, &format!("Scripts/{js}"), &format!("window.loaded = '{js}'"));
        }
    }

    fn config(root: &Path) -> AppConfig {
        AppConfig {
            config_path: None,
            build: BuildConfig {
                root: root.to_path_buf(),
                output: root.join("public"),
                minify: false,
                clean: false,
            },
        }
    }

    #[test]
    fn test_build_all_bundles() {
        let dir = TempDir::new().unwrap();
        install_assets(dir.path());
        let app = Application::start().unwrap();

        build_bundles(&app, &config(dir.path())).unwrap();

        let out = dir.path().join("public/bundle");
        let styles = fs::read_to_string(out.join("bootstrap-styles.css")).unwrap();
        let bootstrap = styles.find(".bootstrap-css").unwrap();
        let theme = styles.find(".bootstrap-theme-css").unwrap();
        let site = styles.find(".Site-css").unwrap();
        assert!(bootstrap < theme && theme < site);

        let scripts = fs::read_to_string(out.join("bootstrap-scripts.js")).unwrap();
        assert!(scripts.contains("jquery-1.10.2.js"));
        assert!(out.join("Home/Index-styles.css").is_file());
        assert!(out.join("Home/Index-scripts.js").is_file());
    }

    #[test]
    fn test_build_fails_on_missing_asset() {
        let dir = TempDir::new().unwrap();
        install_assets(dir.path());
        fs::remove_file(dir.path().join("Scripts/JavaScript2.js")).unwrap();
        let app = Application::start().unwrap();

        let err = build_bundles(&app, &config(dir.path())).unwrap_err();
        assert!(err.to_string().contains("1 bundle failed"));
        assert!(!dir.path().join("public/bundle/Home/Index-scripts.js").exists());
    }

    #[test]
    fn test_build_clean_removes_stale_files() {
        let dir = TempDir::new().unwrap();
        install_assets(dir.path());
        write(dir.path(), "public/stale.txt", "old");
        let app = Application::start().unwrap();

        let mut config = config(dir.path());
        config.build.clean = true;
        build_bundles(&app, &config).unwrap();

        assert!(!dir.path().join("public/stale.txt").exists());
        assert!(dir.path().join("public/bundle/bootstrap-styles.css").is_file());
    }
}
