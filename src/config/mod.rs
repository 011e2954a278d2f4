//! Configuration management for `webbundle.toml`.
//!
//! The config file is optional. When present it is found by searching
//! upward from the working directory, and relative paths inside it are
//! resolved against the directory holding it. CLI flags override the file
//! and resolve against the working directory.
//!
//! | Section   | Purpose                                   |
//! |-----------|-------------------------------------------|
//! | `[build]` | Application root, output, minify, clean   |

mod build;
mod error;
mod util;

pub use build::BuildConfig;
pub use error::ConfigError;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::cli::{Cli, Commands};
use crate::{debug, log};

use build::normalize_path;
use util::find_config_file;

/// Root configuration structure representing webbundle.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Absolute path of the loaded config file, if any.
    #[serde(skip)]
    pub config_path: Option<PathBuf>,

    pub build: BuildConfig,
}

impl AppConfig {
    /// Load configuration and apply CLI overrides.
    pub fn load(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;
        Self::load_from(cli, &cwd)
    }

    /// Load configuration as if invoked from `cwd`.
    fn load_from(cli: &Cli, cwd: &Path) -> Result<Self> {
        let mut config = match find_config_file(cwd, &cli.config) {
            Some(path) => {
                debug!("config"; "loading {}", path.display());
                let mut config = Self::from_path(&path)?;
                let base = path.parent().map(Path::to_path_buf).unwrap_or_else(|| cwd.to_path_buf());
                config.build.normalize(&base);
                config.config_path = Some(path);
                config
            }
            None => {
                debug!("config"; "no {} found, using defaults", cli.config.display());
                let mut config = Self::default();
                config.build.normalize(cwd);
                config
            }
        };

        config.apply_cli(cli, cwd);
        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load configuration from file path, warning about unknown fields.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;
        if !ignored.is_empty() {
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy())
                .unwrap_or_else(|| path.to_string_lossy());
            log!("warning"; "unknown fields in {} are ignored: {}", name, ignored.join(", "));
        }
        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    fn apply_cli(&mut self, cli: &Cli, cwd: &Path) {
        if let Some(root) = &cli.root {
            self.build.root = normalize_path(cwd, root);
        }
        if let Some(args) = cli.build_args() {
            if let Some(output) = &args.output {
                self.build.output = normalize_path(cwd, output);
            }
            if let Some(minify) = args.minify {
                self.build.minify = minify;
            }
            if args.clean {
                self.build.clean = true;
            }
        }
        if let Commands::Check {
            minify: Some(minify),
        } = cli.command
        {
            self.build.minify = minify;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let build = &self.build;
        if !build.root.is_dir() {
            return Err(ConfigError::Validation(format!(
                "[build.root] `{}` is not a directory",
                build.root.display()
            )));
        }
        if build.root.starts_with(&build.output) {
            return Err(ConfigError::Validation(format!(
                "[build.output] `{}` must not contain the application root",
                build.output.display()
            )));
        }
        Ok(())
    }
}
