//! Restaurant endpoint

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use cityscout_core::{normalize, Business};

use super::persist_all;
use crate::http::error::ApiError;
use crate::http::extractors::PlaceRefQuery;
use crate::http::server::AppState;

/// GET /yelp?data[id]=&data[latitude]=&data[longitude]=
async fn restaurants(
    State(state): State<Arc<AppState>>,
    PlaceRefQuery(place): PlaceRefQuery,
) -> Result<Json<Vec<Business>>, ApiError> {
    let cached = state.store.businesses(place.id).await?;
    if !cached.is_empty() {
        tracing::info!(location_id = place.id, count = cached.len(), "Restaurants retrieved from database");
        return Ok(Json(cached));
    }

    let payload = state.upstream.businesses(place.latitude, place.longitude).await?;
    let businesses: Vec<Business> = payload.businesses.into_iter().map(normalize::business).collect();

    let store = state.store.as_ref();
    let location_id = place.id;
    let stored = persist_all("business", &businesses, move |business| {
        store.insert_business(location_id, business)
    })
    .await;
    tracing::info!(location_id, fetched = businesses.len(), stored, "Restaurants retrieved from provider");

    Ok(Json(businesses))
}

/// Restaurant routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/yelp", get(restaurants))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::json;

    use crate::http::routes::testing::{get_json, payload, FakeStore, FakeUpstream};
    use crate::http::{build_router, AppState};

    const URI: &str = "/yelp?data%5Bid%5D=2&data%5Blatitude%5D=47.6&data%5Blongitude%5D=-122.3";

    fn upstream() -> FakeUpstream {
        let upstream = FakeUpstream::default();
        upstream.state().businesses = Some(payload(json!({
            "businesses": [
                {
                    "name": "Pike Place Chowder",
                    "image_url": "https://img.example/chowder.jpg",
                    "price": "$$",
                    "rating": 4.5,
                    "url": "https://yelp.example/chowder"
                },
                {
                    "name": "Taco Truck",
                    "image_url": "https://img.example/taco.jpg",
                    "rating": 4.0,
                    "url": "https://yelp.example/taco"
                }
            ],
            "total": 2
        })));
        upstream
    }

    #[tokio::test]
    async fn miss_maps_every_business() {
        let store = FakeStore::default();
        let upstream = upstream();
        let app = build_router(AppState::new(store.clone(), upstream.clone()));

        let (status, body) = get_json(app.clone(), URI).await;
        assert_eq!(status, StatusCode::OK);

        let list = body.as_array().unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list[0]["name"], "Pike Place Chowder");
        assert_eq!(list[0]["price"], "$$");
        assert_eq!(list[1]["price"], serde_json::Value::Null);
        assert_eq!(store.state().businesses.len(), 2);

        let (_, cached) = get_json(app, URI).await;
        assert_eq!(cached, body);
        assert_eq!(upstream.calls("business"), 1);
    }

    #[tokio::test]
    async fn all_inserts_failing_is_still_200() {
        let store = FakeStore::default();
        store.state().failing_inserts = [0, 1].into_iter().collect();
        let app = build_router(AppState::new(store.clone(), upstream()));

        let (status, body) = get_json(app, URI).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().unwrap().len(), 2);
        assert!(store.state().businesses.is_empty());
    }

    #[tokio::test]
    async fn cache_read_failure_is_500() {
        let store = FakeStore::default();
        store.state().fail_reads = true;
        let upstream = upstream();
        let app = build_router(AppState::new(store, upstream.clone()));

        let (status, _) = get_json(app, URI).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(upstream.calls("business"), 0);
    }
}
