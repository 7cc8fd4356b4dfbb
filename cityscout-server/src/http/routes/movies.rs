//! Movie endpoint

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use cityscout_core::{normalize, Film};

use super::persist_all;
use crate::http::error::ApiError;
use crate::http::extractors::PlaceAddressQuery;
use crate::http::server::AppState;

/// GET /movies?data[id]=&data[formatted_query]=
///
/// Searches by the city part of the address and returns films most popular
/// first.
async fn films(
    State(state): State<Arc<AppState>>,
    PlaceAddressQuery(place): PlaceAddressQuery,
) -> Result<Json<Vec<Film>>, ApiError> {
    let cached = state.store.films(place.id).await?;
    if !cached.is_empty() {
        tracing::info!(location_id = place.id, count = cached.len(), "Movies retrieved from database");
        return Ok(Json(cached));
    }

    let search = normalize::movie_search_query(&place.formatted_query);
    let mut entries = state.upstream.films(&search).await?.results;
    normalize::rank_by_popularity(&mut entries);
    if let Some(max) = state.movies_max_results {
        entries.truncate(max);
    }
    let films: Vec<Film> = entries.into_iter().map(normalize::film).collect();

    let store = state.store.as_ref();
    let location_id = place.id;
    let stored = persist_all("film", &films, move |film| store.insert_film(location_id, film)).await;
    tracing::info!(location_id, search = %search, fetched = films.len(), stored, "Movies retrieved from provider");

    Ok(Json(films))
}

/// Movie routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/movies", get(films))
}
