//! Route table handed to the route-registration step at startup.
//!
//! Only registration is modeled here; matching and dispatch belong to the
//! web server.

use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouteError {
    #[error("route `{0}` is already registered")]
    Duplicate(String),

    #[error("route pattern `{0}` must not start with `/` or `~` or contain `?`")]
    InvalidPattern(String),
}

/// One entry of the route table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Route {
    /// `None` for ignore rules.
    pub name: Option<String>,
    pub pattern: String,
    pub defaults: Vec<(String, String)>,
    /// Requests matching an ignored route bypass routing entirely.
    pub ignored: bool,
}

/// Ordered route table. First match wins when the server consults it.
#[derive(Debug, Default)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a pattern the router must skip (e.g. handler endpoints).
    pub fn ignore(&mut self, pattern: &str) -> Result<(), RouteError> {
        check_pattern(pattern)?;
        self.routes.push(Route {
            name: None,
            pattern: pattern.to_string(),
            defaults: Vec::new(),
            ignored: true,
        });
        Ok(())
    }

    /// Add a named route with default parameter values.
    pub fn map(
        &mut self,
        name: &str,
        pattern: &str,
        defaults: &[(&str, &str)],
    ) -> Result<(), RouteError> {
        check_pattern(pattern)?;
        if self.get(name).is_some() {
            return Err(RouteError::Duplicate(name.to_string()));
        }
        self.routes.push(Route {
            name: Some(name.to_string()),
            pattern: pattern.to_string(),
            defaults: defaults
                .iter()
                .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
                .collect(),
            ignored: false,
        });
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&Route> {
        self.routes
            .iter()
            .find(|route| route.name.as_deref() == Some(name))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Route> {
        self.routes.iter()
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

fn check_pattern(pattern: &str) -> Result<(), RouteError> {
    if pattern.starts_with('/') || pattern.starts_with('~') || pattern.contains('?') {
        return Err(RouteError::InvalidPattern(pattern.to_string()));
    }
    Ok(())
}
