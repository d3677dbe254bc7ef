use crate::OutputFormat;
use crate::time::FormatOptions;
use anyhow::{Context, Result};
use config::{Config as ConfigBuilder, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Prefix for environment overrides, e.g. `HRTIME_FORMAT__PAD=false`.
pub const ENV_PREFIX: &str = "HRTIME";

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct Config {
    /// Default options for `hrt format`; command-line flags win.
    #[serde(default)]
    pub format: FormatOptions,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}

/// Load a config file, layering `HRTIME_*` environment overrides on top.
pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Config> {
    let path = path.as_ref();
    tracing::debug!(path = %path.display(), "loading config");

    let loader = ConfigBuilder::builder()
        .add_source(File::from(path).format(FileFormat::Toml))
        .add_source(environment())
        .build()
        .context("Failed to build config loader")?;

    loader
        .try_deserialize()
        .context("Failed to parse config file")
}

/// Built-in defaults plus environment overrides, without any file.
pub fn load_defaults() -> Result<Config> {
    let loader = ConfigBuilder::builder()
        .add_source(environment())
        .build()
        .context("Failed to build config loader")?;

    loader
        .try_deserialize()
        .context("Failed to parse environment overrides")
}

pub fn default_path() -> Result<PathBuf> {
    Ok(home::home_dir()
        .context("Could not find home directory")?
        .join(".hrtime")
        .join("config.toml"))
}

/// Load `explicit` if given, otherwise `~/.hrtime/config.toml` when it exists.
///
/// An explicit path that does not exist is an error; a missing default file
/// falls back to built-in defaults.
pub fn load(explicit: Option<&Path>) -> Result<Config> {
    if let Some(path) = explicit {
        return load_from_path(path)
            .with_context(|| format!("Failed to load config from {}", path.display()));
    }

    let path = default_path()?;
    if path.exists() {
        load_from_path(&path)
    } else {
        tracing::info!(path = %path.display(), "no config file found, using defaults");
        load_defaults()
    }
}

pub fn save_to_path<P: AsRef<Path>>(config: &Config, path: P) -> Result<()> {
    let toml_string = toml::to_string_pretty(config).context("Failed to serialize config")?;

    std::fs::write(path.as_ref(), toml_string).context("Failed to write config file")?;

    Ok(())
}
