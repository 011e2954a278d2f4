//! webbundle - build-time CSS/JavaScript bundling.

mod app;
mod asset;
mod bundle;
mod cli;
mod config;
mod core;
mod logger;
mod route;

use anyhow::{Context, Result};
use app::Application;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::AppConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    // Startup runs once, before any command reads the tables.
    let app = Application::start().context("application failed to start")?;

    match &cli.command {
        Commands::List { json, routes } => {
            if *routes {
                cli::list::list_routes(&app, *json)
            } else {
                cli::list::list_bundles(&app, *json)
            }
        }
        Commands::Build { .. } => {
            let config = AppConfig::load(&cli)?;
            cli::build::build_bundles(&app, &config)
        }
        Commands::Check { .. } => {
            let config = AppConfig::load(&cli)?;
            cli::check::check_bundles(&app, &config)
        }
        Commands::Render { name, debug } => {
            let config = AppConfig::load(&cli)?;
            cli::render::render_bundle(&app, &config, name, *debug)
        }
    }
}
