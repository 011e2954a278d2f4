//! Asset resolution, aggregation and tag rendering.

mod manifest;
pub mod minify;
mod render;
mod response;
pub mod version;

pub use manifest::AssetManifest;
pub use render::{RenderMode, render_tags};
pub use response::{BundleResponse, build_bundle};
pub use version::{resolve, resolve_optimized};
