use paddock_core::config::LayeredConfig;

/// API server configuration resolved from the layered config
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub port: u16,
    pub cors_origin: String,
    /// Base URL of the upstream prediction service
    pub api_url: String,
    /// Season served when a request does not name one
    pub season: i32,
    pub marker_size: f64,
}

impl ApiConfig {
    /// Load configuration from defaults overlaid with `PADDOCK_*` environment variables
    pub fn from_env() -> Self {
        Self::from_layered(&LayeredConfig::with_defaults().load_from_env())
    }

    pub fn from_layered(config: &LayeredConfig) -> Self {
        Self {
            port: config.port.value,
            cors_origin: config.cors_origin.value.clone(),
            api_url: config.api_url.value.clone(),
            season: config.season.value,
            marker_size: config.marker_size.value,
        }
    }

    /// Get the server bind address
    pub fn bind_address(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}
