//! Configuration loading.
//!
//! A missing file in the default location means "use the defaults". A
//! directory passed explicitly with `--config` must contain the file.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use super::Config;
use super::validation::validate_config;
use crate::constants::*;

/// Path of `sunpaper.toml`, inside `config_dir` when given.
pub fn get_config_path(config_dir: Option<&Path>) -> Result<PathBuf> {
    let base = match config_dir {
        Some(dir) => dir.to_path_buf(),
        None => dirs::config_dir()
            .context("Could not determine the user configuration directory")?
            .join(CONFIG_DIR_NAME),
    };
    Ok(base.join(CONFIG_FILE_NAME))
}

/// Load the configuration for this run.
pub fn load(config_dir: Option<&Path>) -> Result<Config> {
    let config_path = match get_config_path(config_dir) {
        Ok(path) => path,
        // No home directory at all: nothing to load, defaults apply
        Err(_) if config_dir.is_none() => return Ok(Config::default()),
        Err(e) => return Err(e),
    };

    if !config_path.exists() {
        if config_dir.is_some() {
            anyhow::bail!(
                "Configuration file not found at {}",
                config_path.display()
            );
        }
        log_debug!(
            "No configuration at {}, using defaults",
            config_path.display()
        );
        return Ok(Config::default());
    }

    load_from_path(&config_path)
}

/// Load and validate a specific file.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration from {}", path.display()))?;

    let config: Config = toml::from_str(&content)
        .with_context(|| format!("Failed to parse configuration in {}", path.display()))?;

    validate_config(&config)
        .with_context(|| format!("Invalid configuration in {}", path.display()))?;

    log_debug!("Loaded configuration from {}", path.display());
    Ok(config)
}
