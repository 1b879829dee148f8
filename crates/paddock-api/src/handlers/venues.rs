use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};

use crate::dto::{VenueQuery, VenueResponse};
use crate::state::AppState;

pub async fn resolve_venue(
    State(state): State<Arc<AppState>>,
    Query(query): Query<VenueQuery>,
) -> Json<VenueResponse> {
    let resolution = state.resolver.resolve_venue(&query.circuit, &query.location, &query.country);
    tracing::info!(
        circuit = %query.circuit,
        location = %query.location,
        country = %query.country,
        tier = %resolution.tier,
        "Resolved venue"
    );

    Json(VenueResponse {
        circuit: query.circuit,
        location: query.location,
        country: query.country,
        coordinate: resolution.coordinate,
        tier: resolution.tier,
        precise: resolution.tier.is_precise(),
    })
}
