//! `list` command: print the bundle table.

use anyhow::Result;
use owo_colors::OwoColorize;

use crate::app::Application;

pub fn list_bundles(app: &Application, json: bool) -> Result<()> {
    if json {
        let bundles: Vec<_> = app.bundles().iter().collect();
        println!("{}", serde_json::to_string_pretty(&bundles)?);
        return Ok(());
    }

    for def in app.bundles() {
        println!(
            "{} {} {}",
            def.name().bold(),
            format!("({})", def.kind()).dimmed(),
            def.url().dimmed()
        );
        for member in def.members() {
            println!("  {member}");
        }
    }
    Ok(())
}

pub fn list_routes(app: &Application, json: bool) -> Result<()> {
    let routes = app.routes();
    if json {
        let routes: Vec<_> = routes.iter().collect();
        println!("{}", serde_json::to_string_pretty(&routes)?);
        return Ok(());
    }

    for route in routes.iter() {
        match &route.name {
            Some(name) => {
                let defaults = route
                    .defaults
                    .iter()
                    .map(|(k, v)| format!("{k}={v}"))
                    .collect::<Vec<_>>()
                    .join(", ");
                println!("{} {} {}", name.bold(), route.pattern, format!("[{defaults}]").dimmed());
            }
            None => println!("{} {}", "ignore".dimmed(), route.pattern),
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_shape() {
        let app = Application::start().unwrap();
        let bundles: Vec<_> = app.bundles().iter().collect();
        let value = serde_json::to_value(&bundles).unwrap();

        assert_eq!(value[0]["name"], "~/bundle/bootstrap-styles");
        assert_eq!(value[0]["kind"], "style");
        assert_eq!(value[0]["members"][2], "~/Content/Site.css");
        assert_eq!(value[3]["kind"], "script");
    }

    #[test]
    fn test_routes_json_shape() {
        let app = Application::start().unwrap();
        let routes: Vec<_> = app.routes().iter().collect();
        let value = serde_json::to_value(&routes).unwrap();

        assert_eq!(value[0]["ignored"], true);
        assert_eq!(value[1]["name"], "Default");
        assert_eq!(value[1]["defaults"][0][1], "Home");
    }
}
