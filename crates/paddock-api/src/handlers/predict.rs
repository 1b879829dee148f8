use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use paddock_core::models::{PredictionRequest, PredictionResult, RaceId};

use crate::error::ApiError;
use crate::state::AppState;

pub async fn predict_race(
    State(state): State<Arc<AppState>>,
    Path(race_id): Path<i64>,
) -> Result<Json<PredictionResult>, ApiError> {
    tracing::info!(race_id, "Predicting race");

    let result = state.service.predict_race(RaceId(race_id)).await.map_err(|e| {
        tracing::error!(race_id, error = %e, "Prediction failed");
        ApiError::from(e)
    })?;

    Ok(Json(result))
}

pub async fn predict_by_search(
    State(state): State<Arc<AppState>>,
    Json(request): Json<PredictionRequest>,
) -> Result<Json<PredictionResult>, ApiError> {
    let has_name = request.race_name.as_deref().is_some_and(|n| !n.trim().is_empty());
    if !has_name && request.race_id.is_none() {
        return Err(ApiError::bad_request("Please enter a race name or select a race"));
    }
    tracing::info!(race_name = ?request.race_name, race_id = ?request.race_id, "Predicting race by search");

    let result = state.service.predict(&request).await.map_err(|e| {
        tracing::error!(error = %e, "Prediction failed");
        ApiError::from(e)
    })?;

    Ok(Json(result))
}
