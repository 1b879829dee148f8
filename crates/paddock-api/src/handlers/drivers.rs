use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};
use paddock_core::models::{filter_and_sort_drivers, DriverSort};

use crate::dto::{DriversQuery, DriversResponse};
use crate::error::ApiError;
use crate::state::AppState;

pub async fn list_drivers(
    State(state): State<Arc<AppState>>,
    Query(query): Query<DriversQuery>,
) -> Result<Json<DriversResponse>, ApiError> {
    let sort: DriverSort = match query.sort.as_deref() {
        Some(s) => s.parse()?,
        None => DriverSort::default(),
    };
    tracing::info!(search = %query.search, sort = ?sort, "Listing drivers");

    let drivers = state.service.list_drivers().await.map_err(|e| {
        tracing::error!(error = %e, "Failed to list drivers");
        ApiError::from(e)
    })?;

    let total = drivers.len();
    let drivers = filter_and_sort_drivers(&drivers, &query.search, sort);
    Ok(Json(DriversResponse { total, drivers }))
}
