//! Configuration loading utilities for CLI commands

use anyhow::{Context, Result};
use paddock_core::config::{
    normalize_api_url, validate_marker_size, CliConfigOverrides, LayeredConfig,
};
use std::path::{Path, PathBuf};

use crate::errors;

/// Config file picked up from the working directory
pub const CONFIG_FILE_NAME: &str = "paddock.toml";

/// Configuration together with the file it was read from, if any
pub struct LoadedConfig {
    pub config: LayeredConfig,
    pub file: Option<PathBuf>,
}

/// The config file to read: an explicit path, else `paddock.toml` in `cwd` if present
pub fn find_config_file(explicit: Option<&Path>, cwd: &Path) -> Result<Option<PathBuf>> {
    if let Some(path) = explicit {
        if !path.is_file() {
            return Err(errors::config_file_not_found(path).into());
        }
        return Ok(Some(path.to_path_buf()));
    }

    let candidate = cwd.join(CONFIG_FILE_NAME);
    Ok(candidate.is_file().then_some(candidate))
}

/// Load layered configuration: defaults, file, environment, then CLI overrides
pub fn load_config(
    explicit: Option<&Path>,
    cwd: &Path,
    overrides: CliConfigOverrides,
) -> Result<LoadedConfig> {
    let file = find_config_file(explicit, cwd)?;

    let mut config = LayeredConfig::with_defaults();
    if let Some(path) = &file {
        tracing::debug!(path = %path.display(), "Loading configuration file");
        config = config.load_from_file(path)?;
    }
    config = config.load_from_env();
    config.update_from_cli(overrides);

    Ok(LoadedConfig { config, file })
}

/// Build overrides from global flags, validating the service URL and marker size
pub fn overrides_from_flags(
    api_url: Option<&str>,
    season: Option<i32>,
    marker_size: Option<f64>,
) -> Result<CliConfigOverrides> {
    let api_url = api_url
        .map(normalize_api_url)
        .transpose()
        .context("Invalid --api-url")?;
    let marker_size = marker_size
        .map(validate_marker_size)
        .transpose()
        .context("Invalid --marker-size")?;

    Ok(CliConfigOverrides { api_url, season, marker_size })
}
