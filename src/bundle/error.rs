//! Bundle registration errors.

use thiserror::Error;

use crate::core::InvalidVirtualPath;

/// Configuration errors raised while populating the bundle table.
///
/// All of them are fatal at startup.
#[derive(Debug, Error)]
pub enum BundleError {
    #[error("bundle `{0}` is already registered")]
    Duplicate(String),

    #[error("bundle `{0}` has no members")]
    Empty(String),

    #[error("bundle `{bundle}` has an invalid path")]
    InvalidPath {
        bundle: String,
        #[source]
        source: InvalidVirtualPath,
    },

    #[error("bundle `{0}` is not registered")]
    NotFound(String),
}

impl BundleError {
    pub(super) fn invalid_path(bundle: &str, source: InvalidVirtualPath) -> Self {
        Self::InvalidPath {
            bundle: bundle.to_string(),
            source,
        }
    }
}
