//! Forecast endpoint

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use chrono::Utc;
use cityscout_core::{normalize, ForecastDay};

use super::persist_all;
use crate::http::error::ApiError;
use crate::http::extractors::PlaceRefQuery;
use crate::http::server::AppState;

/// GET /weather?data[id]=&data[latitude]=&data[longitude]=
///
/// On a miss the response is built from the fetched days, whether or not
/// every row was stored.
async fn forecast(
    State(state): State<Arc<AppState>>,
    PlaceRefQuery(place): PlaceRefQuery,
) -> Result<Json<Vec<ForecastDay>>, ApiError> {
    let cached = state.store.forecast_days(place.id).await?;
    if !cached.is_empty() {
        tracing::info!(location_id = place.id, days = cached.len(), "Weather retrieved from database");
        return Ok(Json(cached));
    }

    let payload = state.upstream.forecast(place.latitude, place.longitude).await?;
    let now = Utc::now();
    let days = payload
        .daily
        .data
        .iter()
        .map(|day| normalize::forecast_day(day, now))
        .collect::<Result<Vec<_>, _>>()?;

    let store = state.store.as_ref();
    let location_id = place.id;
    let stored = persist_all("forecast day", &days, move |day| {
        store.insert_forecast_day(location_id, day)
    })
    .await;
    tracing::info!(location_id, fetched = days.len(), stored, "Weather retrieved from provider");

    Ok(Json(days))
}

/// Weather routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/weather", get(forecast))
}
