//! Bundle registry: named, ordered groups of style or script assets.
//!
//! ```text
//! ~/bundle/bootstrap-styles (Style)
//! ├── ~/Content/bootstrap.css
//! ├── ~/Content/bootstrap-theme.css
//! └── ~/Content/Site.css
//! ```

mod definition;
mod error;
mod kind;
mod table;

pub use definition::{Bundle, BundleDefinition};
pub use error::BundleError;
pub use kind::BundleKind;
pub use table::BundleTable;
