//! Bundles shipped with the application.

use crate::bundle::{Bundle, BundleError, BundleTable};

/// Register the application's style and script bundles.
///
/// Member order is delivery order: jQuery must stay ahead of anything
/// that plugs into it.
pub fn register_bundles(bundles: &mut BundleTable) -> Result<(), BundleError> {
    bundles.add(
        Bundle::style("~/bundle/bootstrap-styles")
            .include("~/Content/bootstrap.css")
            .include("~/Content/bootstrap-theme.css")
            .include("~/Content/Site.css"),
    )?;
    bundles.add(
        Bundle::style("~/bundle/Home/Index-styles")
            .include("~/Content/StyleSheet1.css")
            .include("~/Content/StyleSheet2.css")
            .include("~/Content/StyleSheet3.css"),
    )?;

    bundles.add(
        Bundle::script("~/bundle/bootstrap-scripts")
            .include("~/Scripts/bootstrap.js")
            .include("~/Scripts/jquery-{version}.js")
            .include("~/Scripts/modernizr-{version}.js"),
    )?;
    bundles.add(
        Bundle::script("~/bundle/Home/Index-scripts")
            .include("~/Scripts/JavaScript1.js")
            .include("~/Scripts/JavaScript2.js")
            .include("~/Scripts/JavaScript3.js"),
    )?;

    Ok(())
}
