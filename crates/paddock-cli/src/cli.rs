use clap::{Args, Parser, Subcommand};
use paddock_core::models::DriverSort;
use std::path::PathBuf;

/// Paddock - Race calendar map and prediction dashboard
#[derive(Parser, Debug)]
#[command(name = "paddock")]
#[command(about = "Race calendar map and prediction dashboard", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Output results in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Configuration file (defaults to ./paddock.toml when present)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Prediction service base URL
    #[arg(long, global = true, value_name = "URL")]
    pub api_url: Option<String>,

    /// Season to load races for
    #[arg(long, global = true, value_name = "YEAR")]
    pub season: Option<i32>,

    /// Unselected marker radius in pixels
    #[arg(long, global = true, value_name = "PX")]
    pub marker_size: Option<f64>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the season's races and where their markers are placed
    Races(RacesArgs),

    /// Resolve venue fields to a map coordinate
    Locate(LocateArgs),

    /// Show where the map camera goes for a selection
    Viewport(ViewportArgs),

    /// Show the race markers for a selection
    Markers(MarkersArgs),

    /// List drivers with their statistics
    Drivers(DriversArgs),

    /// Predict the result of a race
    Predict(PredictArgs),

    /// Show the effective configuration and where each value came from
    Config,
}

#[derive(Args, Debug)]
pub struct RacesArgs {
    /// Only list races whose venue could not be mapped
    #[arg(long)]
    pub unmapped: bool,
}

#[derive(Args, Debug)]
pub struct LocateArgs {
    /// Circuit name
    #[arg(long, default_value = "")]
    pub circuit: String,

    /// City or region
    #[arg(long, default_value = "")]
    pub location: String,

    /// Country
    #[arg(long, default_value = "")]
    pub country: String,
}

#[derive(Args, Debug)]
pub struct ViewportArgs {
    /// Race ID to select
    #[arg(long, value_name = "RACE_ID")]
    pub select: Option<i64>,
}

#[derive(Args, Debug)]
pub struct MarkersArgs {
    /// Race ID to select
    #[arg(long, value_name = "RACE_ID")]
    pub select: Option<i64>,

    /// Unselected marker radius in pixels (defaults to the configured marker size)
    #[arg(long, value_name = "PX")]
    pub base_size: Option<f64>,

    /// Print the markers as a GeoJSON FeatureCollection
    #[arg(long)]
    pub geojson: bool,
}

#[derive(Args, Debug)]
pub struct DriversArgs {
    /// Filter by driver name or reference (case-insensitive)
    #[arg(long, short = 's', default_value = "")]
    pub search: String,

    /// Sort order: wins, races or name
    #[arg(long, default_value = "wins")]
    pub sort: DriverSort,
}

#[derive(Args, Debug)]
pub struct PredictArgs {
    /// Race ID from `paddock races`; when given, the other fields are ignored
    pub race_id: Option<i64>,

    /// Race name for a manual prediction
    #[arg(long)]
    pub name: Option<String>,

    /// Circuit name for a manual prediction
    #[arg(long)]
    pub circuit: Option<String>,

    /// Race date (YYYY-MM-DD) for a manual prediction
    #[arg(long)]
    pub date: Option<String>,

    /// Show the full predicted finishing order
    #[arg(long)]
    pub full: bool,
}
