use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};

use crate::dto::{RacesResponse, SeasonQuery};
use crate::error::ApiError;
use crate::services::DashboardService;
use crate::state::AppState;

pub async fn list_races(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SeasonQuery>,
) -> Result<Json<RacesResponse>, ApiError> {
    let year = state.season(query.year);
    tracing::info!(year, "Listing races");

    let races = DashboardService::races(&state, year).await?;
    Ok(Json(RacesResponse { year, races: DashboardService::mapped(&state, races) }))
}
