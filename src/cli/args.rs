//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Build-time CSS/JavaScript bundler
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Application root holding Content/ and Scripts/
    #[arg(short, long, global = true, value_hint = clap::ValueHint::DirPath)]
    pub root: Option<PathBuf>,

    /// Config file path (default: webbundle.toml)
    #[arg(short = 'C', long, global = true, default_value = "webbundle.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Write every bundle to the output directory
    #[command(visible_alias = "b")]
    Build {
        #[command(flatten)]
        build_args: BuildArgs,
    },

    /// Print the registered bundles
    #[command(visible_alias = "l")]
    List {
        /// Print as JSON
        #[arg(short, long)]
        json: bool,

        /// Print the route table instead of the bundles
        #[arg(long)]
        routes: bool,
    },

    /// Resolve every bundle member and report missing assets
    #[command(visible_alias = "c")]
    Check {
        /// Resolve as an optimized build would (prefer *.min.* files)
        #[arg(short, long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
        minify: Option<bool>,
    },

    /// Print the HTML tags that reference a bundle
    #[command(visible_alias = "r")]
    Render {
        /// Bundle name, e.g. ~/bundle/bootstrap-styles
        name: String,

        /// One tag per member instead of one tag for the built bundle
        #[arg(short, long)]
        debug: bool,
    },
}

/// Arguments of the build command
#[derive(clap::Args, Debug, Clone)]
pub struct BuildArgs {
    /// Output directory path
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub output: Option<PathBuf>,

    /// Clean output directory completely before building
    #[arg(short, long)]
    pub clean: bool,

    /// Minify bundles and prefer pre-minified members
    #[arg(short, long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub minify: Option<bool>,
}

impl Cli {
    pub fn build_args(&self) -> Option<&BuildArgs> {
        match &self.command {
            Commands::Build { build_args } => Some(build_args),
            _ => None,
        }
    }
}
