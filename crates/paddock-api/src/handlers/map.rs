use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};
use geojson::FeatureCollection;
use paddock_core::models::RaceId;

use crate::dto::{MapQuery, ViewportResponse};
use crate::error::ApiError;
use crate::services::DashboardService;
use crate::state::AppState;

pub async fn get_viewport(
    State(state): State<Arc<AppState>>,
    Query(query): Query<MapQuery>,
) -> Result<Json<ViewportResponse>, ApiError> {
    let year = state.season(query.year);
    let selected = query.selected.map(RaceId);
    tracing::info!(year, selected = ?query.selected, "Computing viewport");

    let races = DashboardService::races(&state, year).await?;
    Ok(Json(DashboardService::viewport(&state, year, &races, selected)))
}

pub async fn get_markers(
    State(state): State<Arc<AppState>>,
    Query(query): Query<MapQuery>,
) -> Result<Json<FeatureCollection>, ApiError> {
    let year = state.season(query.year);
    let base_size = query.base_size.unwrap_or(state.marker_size);
    tracing::info!(year, selected = ?query.selected, base_size, "Building markers");

    let races = DashboardService::races(&state, year).await?;
    let collection =
        DashboardService::markers(&state, &races, query.selected.map(RaceId), base_size)?;
    Ok(Json(collection))
}
