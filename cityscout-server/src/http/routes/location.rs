//! Place resolution endpoint

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use cityscout_core::{normalize, Place};

use crate::http::error::ApiError;
use crate::http::extractors::LocationQuery;
use crate::http::server::AppState;

/// GET /location?data=<query> - resolve a place, geocoding on a cache miss
async fn resolve_location(
    State(state): State<Arc<AppState>>,
    LocationQuery(query): LocationQuery,
) -> Result<Json<Place>, ApiError> {
    if let Some(place) = state.store.find_place(&query).await? {
        tracing::info!(query = %query, id = place.id, "Location retrieved from database");
        return Ok(Json(place));
    }

    let payload = state.upstream.geocode(&query).await?;
    let place = normalize::place_from_geocode(&query, payload)?;
    tracing::info!(query = %query, formatted = %place.formatted_query, "Location retrieved from geocoder");

    let place = state.store.insert_place(place).await?;
    tracing::debug!(id = place.id, "Location stored");

    Ok(Json(place))
}

/// Location routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/location", get(resolve_location))
}
