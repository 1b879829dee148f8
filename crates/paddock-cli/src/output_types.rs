use paddock_core::config::ConfigSource;
use paddock_core::models::{Driver, PredictionResult, RaceDescriptor, RaceId};
use paddock_geo::{CameraMode, Coordinate, Marker, Resolution, ResolutionTier, ViewportTarget};
use serde::Serialize;
use tabled::Tabled;

/// Output for races command
#[derive(Debug, Serialize)]
pub struct RacesOutput {
    pub season: i32,
    pub total: usize,
    pub unmapped: usize,
    pub races: Vec<RaceRow>,
}

#[derive(Debug, Serialize, Tabled)]
pub struct RaceRow {
    #[tabled(rename = "ID")]
    pub race_id: i64,
    #[tabled(rename = "Round")]
    pub round: u32,
    #[tabled(rename = "Race")]
    pub name: String,
    #[tabled(rename = "Venue")]
    pub venue: String,
    #[tabled(rename = "Date")]
    pub date: String,
    #[tabled(rename = "Lat")]
    pub lat: f64,
    #[tabled(rename = "Lng")]
    pub lng: f64,
    #[tabled(rename = "Match")]
    pub tier: ResolutionTier,
}

impl RaceRow {
    pub fn new(race: &RaceDescriptor, resolution: Resolution) -> Self {
        Self {
            race_id: race.race_id.0,
            round: race.round,
            name: race.name.clone(),
            venue: race.venue_line(),
            date: race.date.clone(),
            lat: resolution.coordinate.lat,
            lng: resolution.coordinate.lng,
            tier: resolution.tier,
        }
    }
}

/// Output for locate command
#[derive(Debug, Serialize)]
pub struct LocateOutput {
    pub circuit: String,
    pub location: String,
    pub country: String,
    pub coordinate: Coordinate,
    pub tier: ResolutionTier,
    pub precise: bool,
}

/// Output for viewport command
#[derive(Debug, Serialize)]
pub struct ViewportOutput {
    pub season: i32,
    pub selected: Option<RaceId>,
    pub race_count: usize,
    pub mode: CameraMode,
    pub target: Option<ViewportTarget>,
    pub initial: ViewportTarget,
}

/// Output for markers command
#[derive(Debug, Serialize)]
pub struct MarkersOutput {
    pub season: i32,
    pub selected: Option<RaceId>,
    pub base_size: f64,
    pub markers: Vec<Marker>,
}

#[derive(Debug, Serialize, Tabled)]
pub struct MarkerRow {
    #[tabled(rename = "ID")]
    pub race_id: i64,
    #[tabled(rename = "Race")]
    pub name: String,
    #[tabled(rename = "Selected")]
    pub selected: String,
    #[tabled(rename = "Radius")]
    pub radius: f64,
    #[tabled(rename = "Border")]
    pub border_width: u8,
    #[tabled(rename = "Icon")]
    pub icon: String,
    #[tabled(rename = "Schedule")]
    pub schedule: String,
}

impl From<&Marker> for MarkerRow {
    fn from(marker: &Marker) -> Self {
        Self {
            race_id: marker.race_id.0,
            name: marker.popup.title.clone(),
            selected: if marker.selected { "●".to_string() } else { String::new() },
            radius: marker.style.radius,
            border_width: marker.style.border_width,
            icon: format!("{0}x{0}", marker.style.icon_size()),
            schedule: marker.popup.schedule.clone(),
        }
    }
}

/// Output for drivers command
#[derive(Debug, Serialize)]
pub struct DriversOutput {
    pub total: usize,
    pub shown: usize,
    pub drivers: Vec<Driver>,
}

#[derive(Debug, Serialize, Tabled)]
pub struct DriverRow {
    #[tabled(rename = "Driver")]
    pub driver_name: String,
    #[tabled(rename = "Ref")]
    pub driver_ref: String,
    #[tabled(rename = "Team")]
    pub team: String,
    #[tabled(rename = "Races")]
    pub total_races: u32,
    #[tabled(rename = "Predicted Wins")]
    pub predicted_wins: u32,
}

impl From<&Driver> for DriverRow {
    fn from(driver: &Driver) -> Self {
        Self {
            driver_name: driver.driver_name.clone(),
            driver_ref: driver.driver_ref.clone(),
            team: driver.current_team.clone().unwrap_or_else(|| "-".to_string()),
            total_races: driver.total_races,
            predicted_wins: driver.predicted_wins,
        }
    }
}

/// Output for predict command
#[derive(Debug, Serialize)]
pub struct PredictOutput {
    pub confidence_percent: u32,
    #[serde(flatten)]
    pub prediction: PredictionResult,
}

#[derive(Debug, Serialize, Tabled)]
pub struct PositionRow {
    #[tabled(rename = "Pos")]
    pub position: String,
    #[tabled(rename = "Driver")]
    pub driver: String,
    #[tabled(rename = "Team")]
    pub team: String,
    #[tabled(rename = "Grid")]
    pub grid: String,
}

/// Output for config command
#[derive(Debug, Serialize)]
pub struct ConfigOutput {
    pub config_file: Option<String>,
    pub values: Vec<ConfigEntry>,
}

#[derive(Debug, Serialize)]
pub struct ConfigEntry {
    pub key: String,
    pub value: String,
    pub source: ConfigSource,
}
