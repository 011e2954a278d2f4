//! Routes installed at startup.

use crate::route::{RouteError, RouteTable};

pub fn register_routes(routes: &mut RouteTable) -> Result<(), RouteError> {
    routes.ignore("{resource}.axd/{*pathInfo}")?;
    routes.map(
        "Default",
        "{controller}/{action}/{id}",
        &[("controller", "Home"), ("action", "Index"), ("id", "")],
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_route_defaults() {
        let mut routes = RouteTable::new();
        register_routes(&mut routes).unwrap();
        assert_eq!(routes.len(), 2);
        assert!(routes.iter().next().is_some_and(|r| r.ignored));

        let default = routes.get("Default").unwrap();
        let controller = default
            .defaults
            .iter()
            .find(|(k, _)| k == "controller")
            .map(|(_, v)| v.as_str());
        assert_eq!(controller, Some("Home"));
    }
}
