use crate::error::{PaddockError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::Path;

pub const DEFAULT_API_URL: &str = "http://localhost:8000";
pub const DEFAULT_SEASON: i32 = 2025;
pub const DEFAULT_MARKER_SIZE: f64 = 12.0;
pub const DEFAULT_PORT: u16 = 3001;
pub const DEFAULT_CORS_ORIGIN: &str = "http://localhost:3000";

/// Configuration source for tracking where values come from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfigSource {
    /// Default value
    Default,
    /// Loaded from config file
    File,
    /// Loaded from environment variable
    Environment,
    /// Provided via CLI argument
    Cli,
}

impl ConfigSource {
    /// Returns the precedence level (higher = higher priority)
    pub fn precedence(&self) -> u8 {
        match self {
            ConfigSource::Default => 0,
            ConfigSource::File => 1,
            ConfigSource::Environment => 2,
            ConfigSource::Cli => 3,
        }
    }
}

/// A configuration value with its source
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigValue<T> {
    pub value: T,
    pub source: ConfigSource,
}

impl<T> ConfigValue<T> {
    pub fn new(value: T, source: ConfigSource) -> Self {
        Self { value, source }
    }

    /// Update the value if the new source has higher precedence
    pub fn update(&mut self, value: T, source: ConfigSource) {
        if source.precedence() > self.source.precedence() {
            self.value = value;
            self.source = source;
        }
    }
}

/// Layered configuration for Paddock
#[derive(Debug, Clone)]
pub struct LayeredConfig {
    /// Base URL of the prediction service
    pub api_url: ConfigValue<String>,
    /// Season whose schedule is loaded
    pub season: ConfigValue<i32>,
    /// Unselected marker radius in pixels
    pub marker_size: ConfigValue<f64>,
    /// Port the dashboard API listens on
    pub port: ConfigValue<u16>,
    /// Origin allowed to call the dashboard API
    pub cors_origin: ConfigValue<String>,
}

impl LayeredConfig {
    /// Create a new configuration with default values
    pub fn with_defaults() -> Self {
        Self {
            api_url: ConfigValue::new(DEFAULT_API_URL.to_string(), ConfigSource::Default),
            season: ConfigValue::new(DEFAULT_SEASON, ConfigSource::Default),
            marker_size: ConfigValue::new(DEFAULT_MARKER_SIZE, ConfigSource::Default),
            port: ConfigValue::new(DEFAULT_PORT, ConfigSource::Default),
            cors_origin: ConfigValue::new(DEFAULT_CORS_ORIGIN.to_string(), ConfigSource::Default),
        }
    }

    /// Load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;

        let file_config: FileConfig =
            toml::from_str(&content).map_err(|e| PaddockError::ConfigInvalid {
                key: "file".to_string(),
                reason: format!("Failed to parse TOML: {}", e),
            })?;

        if let Some(api_url) = file_config.api_url {
            self.api_url.update(normalize_api_url(&api_url)?, ConfigSource::File);
        }

        if let Some(season) = file_config.season {
            self.season.update(season, ConfigSource::File);
        }

        if let Some(marker_size) = file_config.marker_size {
            self.marker_size.update(validate_marker_size(marker_size)?, ConfigSource::File);
        }

        if let Some(port) = file_config.port {
            self.port.update(port, ConfigSource::File);
        }

        if let Some(cors_origin) = file_config.cors_origin {
            self.cors_origin.update(cors_origin, ConfigSource::File);
        }

        Ok(self)
    }

    /// Load configuration from environment variables
    pub fn load_from_env(mut self) -> Self {
        // PADDOCK_API_URL
        if let Ok(url) = env::var("PADDOCK_API_URL") {
            match normalize_api_url(&url) {
                Ok(url) => self.api_url.update(url, ConfigSource::Environment),
                Err(_) => tracing::warn!(
                    "Invalid PADDOCK_API_URL value '{}': expected an http(s) URL",
                    url
                ),
            }
        }

        // PADDOCK_SEASON
        if let Ok(season_str) = env::var("PADDOCK_SEASON") {
            match season_str.parse::<i32>() {
                Ok(season) => self.season.update(season, ConfigSource::Environment),
                Err(_) => tracing::warn!(
                    "Invalid PADDOCK_SEASON value '{}': expected a year",
                    season_str
                ),
            }
        }

        // PADDOCK_MARKER_SIZE
        if let Ok(size_str) = env::var("PADDOCK_MARKER_SIZE") {
            match parse_marker_size(&size_str) {
                Ok(size) => self.marker_size.update(size, ConfigSource::Environment),
                Err(_) => tracing::warn!(
                    "Invalid PADDOCK_MARKER_SIZE value '{}': expected a positive number",
                    size_str
                ),
            }
        }

        // PADDOCK_PORT
        if let Ok(port_str) = env::var("PADDOCK_PORT") {
            match port_str.parse::<u16>() {
                Ok(port) => self.port.update(port, ConfigSource::Environment),
                Err(_) => tracing::warn!(
                    "Invalid PADDOCK_PORT value '{}': expected a port number",
                    port_str
                ),
            }
        }

        // PADDOCK_CORS_ORIGIN
        if let Ok(origin) = env::var("PADDOCK_CORS_ORIGIN") {
            self.cors_origin.update(origin, ConfigSource::Environment);
        }

        self
    }

    /// Update configuration from CLI arguments
    pub fn update_from_cli(&mut self, overrides: CliConfigOverrides) {
        if let Some(api_url) = overrides.api_url {
            self.api_url.update(api_url, ConfigSource::Cli);
        }

        if let Some(season) = overrides.season {
            self.season.update(season, ConfigSource::Cli);
        }

        if let Some(marker_size) = overrides.marker_size {
            self.marker_size.update(marker_size, ConfigSource::Cli);
        }
    }

    /// Get all configuration values as a map for inspection
    pub fn to_inspection_map(&self) -> HashMap<String, (String, ConfigSource)> {
        let mut map = HashMap::new();

        map.insert("api_url".to_string(), (self.api_url.value.clone(), self.api_url.source));

        map.insert("season".to_string(), (self.season.value.to_string(), self.season.source));

        map.insert(
            "marker_size".to_string(),
            (format!("{}px", self.marker_size.value), self.marker_size.source),
        );

        map.insert("port".to_string(), (self.port.value.to_string(), self.port.source));

        map.insert(
            "cors_origin".to_string(),
            (self.cors_origin.value.clone(), self.cors_origin.source),
        );

        map
    }
}

/// Configuration loaded from TOML file
#[derive(Debug, Deserialize, Serialize)]
struct FileConfig {
    api_url: Option<String>,
    season: Option<i32>,
    marker_size: Option<f64>,
    port: Option<u16>,
    cors_origin: Option<String>,
}

/// CLI configuration overrides
#[derive(Debug, Default)]
pub struct CliConfigOverrides {
    pub api_url: Option<String>,
    pub season: Option<i32>,
    pub marker_size: Option<f64>,
}

/// Check that a service URL is http(s) and strip any trailing slash
pub fn normalize_api_url(s: &str) -> Result<String> {
    let trimmed = s.trim().trim_end_matches('/');
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        Ok(trimmed.to_string())
    } else {
        Err(PaddockError::ConfigInvalid {
            key: "api_url".to_string(),
            reason: format!("Invalid service URL: {}. Expected http:// or https://", s),
        })
    }
}

/// Parse a marker size from string
pub fn parse_marker_size(s: &str) -> Result<f64> {
    let size = s.trim().parse::<f64>().map_err(|_| PaddockError::ConfigInvalid {
        key: "marker_size".to_string(),
        reason: format!("Invalid marker size: {}", s),
    })?;
    validate_marker_size(size)
}

/// Check that a marker size is a positive finite number
pub fn validate_marker_size(size: f64) -> Result<f64> {
    if size.is_finite() && size > 0.0 {
        Ok(size)
    } else {
        Err(PaddockError::ConfigInvalid {
            key: "marker_size".to_string(),
            reason: format!("Marker size must be a positive number, got {}", size),
        })
    }
}
