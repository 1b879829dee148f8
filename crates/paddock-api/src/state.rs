use paddock_core::ports::PredictionService;
use paddock_geo::CoordinateResolver;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub service: Arc<dyn PredictionService>,
    pub resolver: CoordinateResolver,
    pub default_season: i32,
    pub marker_size: f64,
}

impl AppState {
    pub fn new(
        service: Arc<dyn PredictionService>,
        resolver: CoordinateResolver,
        default_season: i32,
        marker_size: f64,
    ) -> Self {
        Self {
            service,
            resolver,
            default_season,
            marker_size,
        }
    }

    /// Season to serve: the requested one, else the configured default
    pub fn season(&self, requested: Option<i32>) -> i32 {
        requested.unwrap_or(self.default_season)
    }
}
