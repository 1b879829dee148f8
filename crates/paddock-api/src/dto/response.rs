use paddock_core::models::{Driver, RaceDescriptor, RaceId};
use paddock_geo::{CameraMode, Coordinate, ResolutionTier, ViewportTarget};
use serde::Serialize;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self { status: "ok", service: "paddock-api" }
    }
}

/// A race with the coordinate its marker is placed at
#[derive(Debug, Serialize)]
pub struct MappedRace {
    #[serde(flatten)]
    pub race: RaceDescriptor,
    pub coordinate: Coordinate,
    pub tier: ResolutionTier,
}

#[derive(Debug, Serialize)]
pub struct RacesResponse {
    pub year: i32,
    pub races: Vec<MappedRace>,
}

/// Camera target for a race list and selection
#[derive(Debug, Serialize)]
pub struct ViewportResponse {
    pub year: i32,
    pub selected: Option<RaceId>,
    pub mode: CameraMode,
    /// `None` when there are no races to frame
    pub target: Option<ViewportTarget>,
    /// Where a freshly created map starts
    pub initial: ViewportTarget,
}

#[derive(Debug, Serialize)]
pub struct VenueResponse {
    pub circuit: String,
    pub location: String,
    pub country: String,
    pub coordinate: Coordinate,
    pub tier: ResolutionTier,
    pub precise: bool,
}

#[derive(Debug, Serialize)]
pub struct DriversResponse {
    pub total: usize,
    pub drivers: Vec<Driver>,
}
