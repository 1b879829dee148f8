//! Command implementations

mod config;
mod drivers;
mod locate;
mod markers;
mod predict;
mod races;
mod viewport;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use paddock_client::HttpPredictionService;
use paddock_core::config::LayeredConfig;
use paddock_core::models::RaceDescriptor;
use paddock_core::ports::PredictionService;
use paddock_geo::CoordinateResolver;

use crate::cli::{Cli, Commands};
use crate::config_loader::{self, LoadedConfig};
use crate::output::OutputWriter;

/// Everything a command needs besides its own arguments
pub struct CommandContext {
    pub config: LayeredConfig,
    pub config_file: Option<PathBuf>,
    pub resolver: CoordinateResolver,
    pub service: Arc<dyn PredictionService>,
}

impl CommandContext {
    pub fn new(loaded: LoadedConfig) -> Self {
        let service = HttpPredictionService::new(loaded.config.api_url.value.clone());
        Self {
            config: loaded.config,
            config_file: loaded.file,
            resolver: CoordinateResolver::default(),
            service: Arc::new(service),
        }
    }

    pub fn season(&self) -> i32 {
        self.config.season.value
    }

    /// Races for the configured season
    pub async fn load_races(&self) -> Result<Vec<RaceDescriptor>> {
        let season = self.season();
        let races = self
            .service
            .list_races(season)
            .await
            .with_context(|| format!("Failed to load races for season {}", season))?;
        tracing::debug!(season, count = races.len(), "Loaded races");
        Ok(races)
    }
}

/// Execute a CLI command
pub async fn execute(cli: Cli, output: &OutputWriter) -> Result<()> {
    let cwd = std::env::current_dir().context("Failed to read working directory")?;
    let overrides =
        config_loader::overrides_from_flags(cli.api_url.as_deref(), cli.season, cli.marker_size)?;
    let loaded = config_loader::load_config(cli.config.as_deref(), &cwd, overrides)?;
    let ctx = CommandContext::new(loaded);

    match cli.command {
        Commands::Races(args) => races::execute(args, &ctx, output).await,
        Commands::Locate(args) => locate::execute(args, &ctx, output),
        Commands::Viewport(args) => viewport::execute(args, &ctx, output).await,
        Commands::Markers(args) => markers::execute(args, &ctx, output).await,
        Commands::Drivers(args) => drivers::execute(args, &ctx, output).await,
        Commands::Predict(args) => predict::execute(args, &ctx, output).await,
        Commands::Config => config::execute(&ctx, output),
    }
}
