//! Application startup.
//!
//! [`Application::start`] is the one-time initialization step: it fills the
//! route table, then the bundle table, and hands back both as immutable
//! state. Callers pass `&Application` to whatever needs the tables.

mod bundles;
mod routes;

pub use bundles::register_bundles;
pub use routes::register_routes;

use thiserror::Error;

use crate::bundle::{BundleError, BundleTable};
use crate::debug;
use crate::route::{RouteError, RouteTable};

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("route registration failed")]
    Routes(#[from] RouteError),

    #[error("bundle registration failed")]
    Bundles(#[from] BundleError),
}

/// Process-wide state produced by startup. Read-only once built.
#[derive(Debug)]
pub struct Application {
    routes: RouteTable,
    bundles: BundleTable,
}

impl Application {
    /// Run the startup hook. Fails fast on the first configuration error.
    pub fn start() -> Result<Self, StartupError> {
        let mut routes = RouteTable::new();
        register_routes(&mut routes)?;

        let mut bundles = BundleTable::new();
        register_bundles(&mut bundles)?;

        debug!("startup"; "{} routes, {} bundles registered", routes.len(), bundles.len());
        Ok(Self { routes, bundles })
    }

    #[inline]
    pub fn routes(&self) -> &RouteTable {
        &self.routes
    }

    #[inline]
    pub fn bundles(&self) -> &BundleTable {
        &self.bundles
    }
}
