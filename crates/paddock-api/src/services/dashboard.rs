use geojson::FeatureCollection;
use paddock_core::models::{RaceDescriptor, RaceId};
use paddock_geo::models::bounds;
use paddock_geo::{CameraMode, MarkerLayer, ViewportController};

use crate::dto::{MappedRace, ViewportResponse};
use crate::error::ApiError;
use crate::state::AppState;

/// Map computations for one request.
///
/// The server keeps no selection between requests; each call rebuilds the view
/// from the season's race list and the selection named in the query.
pub struct DashboardService;

impl DashboardService {
    /// Fetch a season's races from the prediction service
    pub async fn races(state: &AppState, year: i32) -> Result<Vec<RaceDescriptor>, ApiError> {
        state.service.list_races(year).await.map_err(|e| {
            tracing::error!(year, error = %e, "Failed to list races");
            ApiError::from(e)
        })
    }

    /// Races annotated with the coordinate and tier their marker uses
    pub fn mapped(state: &AppState, races: Vec<RaceDescriptor>) -> Vec<MappedRace> {
        races
            .into_iter()
            .map(|race| {
                let resolution = state.resolver.resolve_with_tier(&race);
                MappedRace { race, coordinate: resolution.coordinate, tier: resolution.tier }
            })
            .collect()
    }

    pub fn viewport(
        state: &AppState,
        year: i32,
        races: &[RaceDescriptor],
        selected: Option<RaceId>,
    ) -> ViewportResponse {
        let controller = ViewportController::detached(state.resolver.clone());
        let target = controller.compute_target(races, selected);

        ViewportResponse {
            year,
            selected,
            mode: target.map(|t| t.mode).unwrap_or(CameraMode::Overview),
            target,
            initial: controller.initial_view(races),
        }
    }

    /// Marker layer as GeoJSON, with a bounding box when there is at least one race
    pub fn markers(
        state: &AppState,
        races: &[RaceDescriptor],
        selected: Option<RaceId>,
        base_size: f64,
    ) -> Result<FeatureCollection, ApiError> {
        if !base_size.is_finite() || base_size <= 0.0 {
            return Err(ApiError::bad_request("base_size must be a positive number")
                .with_details(format!("got {}", base_size)));
        }

        let markers = MarkerLayer::build(&state.resolver, races, selected, base_size);
        let positions: Vec<_> = markers.iter().map(|m| m.position).collect();

        let mut collection = MarkerLayer::to_feature_collection(&markers);
        collection.bbox = bounds(&positions)
            .map(|rect| vec![rect.min().x, rect.min().y, rect.max().x, rect.max().y]);

        Ok(collection)
    }
}
