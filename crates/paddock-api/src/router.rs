use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Create the API router with all routes
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Health
        .route("/health", get(handlers::health_check))

        // Schedule and map
        .route("/api/v1/races", get(handlers::list_races))
        .route("/api/v1/viewport", get(handlers::get_viewport))
        .route("/api/v1/markers", get(handlers::get_markers))
        .route("/api/v1/venues/resolve", get(handlers::resolve_venue))

        // Drivers
        .route("/api/v1/drivers", get(handlers::list_drivers))

        // Predictions
        .route("/api/v1/predict", post(handlers::predict_by_search))
        .route("/api/v1/predict/{race_id}", get(handlers::predict_race))

        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
