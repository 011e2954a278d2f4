//! `check` command: resolve every member against installed assets.

use anyhow::{Result, bail};
use owo_colors::OwoColorize;

use crate::app::Application;
use crate::asset::{AssetManifest, resolve, resolve_optimized};
use crate::config::AppConfig;
use crate::log;
use crate::logger::plural;

/// Outcome of resolving one member.
#[derive(Debug, PartialEq, Eq)]
pub struct MemberReport {
    pub bundle: String,
    pub member: String,
    pub resolved: Result<String, String>,
}

/// Resolve all members of all bundles without reading any file.
pub fn collect_reports(
    app: &Application,
    manifest: &AssetManifest,
    optimize: bool,
) -> Vec<MemberReport> {
    app.bundles()
        .iter()
        .flat_map(|def| {
            def.members().iter().map(move |member| {
                let resolved = if optimize {
                    resolve_optimized(member, manifest)
                } else {
                    resolve(member, manifest)
                };
                MemberReport {
                    bundle: def.name().to_string(),
                    member: member.to_string(),
                    resolved: resolved.map(|p| p.to_string()).map_err(|e| e.to_string()),
                }
            })
        })
        .collect()
}

pub fn check_bundles(app: &Application, config: &AppConfig) -> Result<()> {
    let build = &config.build;
    let manifest = AssetManifest::scan(&build.root, std::slice::from_ref(&build.output));
    let reports = collect_reports(app, &manifest, build.minify);

    let mut current = "";
    for report in &reports {
        if report.bundle != current {
            println!("{}", report.bundle.bold());
            current = &report.bundle;
        }
        match &report.resolved {
            Ok(path) if *path == report.member => println!("  {} {}", "✓".green(), path),
            Ok(path) => println!("  {} {} → {}", "✓".green(), report.member, path),
            Err(e) => println!("  {} {}", "✗".red(), e),
        }
    }

    let missing = reports.iter().filter(|r| r.resolved.is_err()).count();
    if missing > 0 {
        bail!("{} could not be resolved", plural(missing, "member"));
    }
    log!("check"; "all {} resolved", plural(reports.len(), "member"));
    Ok(())
}
