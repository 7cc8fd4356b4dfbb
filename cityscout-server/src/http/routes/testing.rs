//! In-memory store and upstream doubles for route tests

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use cityscout_core::payload::{
    BusinessSearchResponse, ForecastResponse, GeocodeResponse, MovieSearchResponse,
};
use cityscout_core::{Business, Film, ForecastDay, NewPlace, Place};
use tokio::sync::Barrier;
use tower::ServiceExt;

use crate::db::{CacheStore, DbError};
use crate::upstream::{Upstream, UpstreamError};

#[derive(Default)]
pub struct StoreState {
    pub places: Vec<Place>,
    pub forecasts: Vec<(i64, ForecastDay)>,
    pub businesses: Vec<(i64, Business)>,
    pub films: Vec<(i64, Film)>,
    /// Dependent-row insert attempts, successful or not
    pub insert_attempts: usize,
    /// Attempt indexes that fail
    pub failing_inserts: HashSet<usize>,
    pub fail_reads: bool,
    next_id: i64,
}

impl StoreState {
    fn read(&self) -> Result<(), DbError> {
        if self.fail_reads {
            return Err(DbError::Sqlx(sqlx::Error::PoolTimedOut));
        }
        Ok(())
    }

    fn attempt_insert(&mut self) -> Result<(), DbError> {
        let attempt = self.insert_attempts;
        self.insert_attempts += 1;
        if self.failing_inserts.contains(&attempt) {
            return Err(DbError::Sqlx(sqlx::Error::PoolTimedOut));
        }
        Ok(())
    }
}

#[derive(Clone, Default)]
pub struct FakeStore {
    state: Arc<Mutex<StoreState>>,
}

impl FakeStore {
    pub fn state(&self) -> MutexGuard<'_, StoreState> {
        self.state.lock().unwrap()
    }
}

#[async_trait]
impl CacheStore for FakeStore {
    async fn find_place(&self, query: &str) -> Result<Option<Place>, DbError> {
        let state = self.state();
        state.read()?;
        Ok(state.places.iter().find(|p| p.search_query == query).cloned())
    }

    async fn insert_place(&self, place: NewPlace) -> Result<Place, DbError> {
        let mut state = self.state();
        state.read()?;
        state.next_id += 1;
        let place = place.with_id(state.next_id);
        state.places.push(place.clone());
        Ok(place)
    }

    async fn forecast_days(&self, location_id: i64) -> Result<Vec<ForecastDay>, DbError> {
        let state = self.state();
        state.read()?;
        Ok(rows_for(&state.forecasts, location_id))
    }

    async fn insert_forecast_day(&self, location_id: i64, day: &ForecastDay) -> Result<(), DbError> {
        let mut state = self.state();
        state.attempt_insert()?;
        state.forecasts.push((location_id, day.clone()));
        Ok(())
    }

    async fn businesses(&self, location_id: i64) -> Result<Vec<Business>, DbError> {
        let state = self.state();
        state.read()?;
        Ok(rows_for(&state.businesses, location_id))
    }

    async fn insert_business(&self, location_id: i64, business: &Business) -> Result<(), DbError> {
        let mut state = self.state();
        state.attempt_insert()?;
        state.businesses.push((location_id, business.clone()));
        Ok(())
    }

    async fn films(&self, location_id: i64) -> Result<Vec<Film>, DbError> {
        let state = self.state();
        state.read()?;
        Ok(rows_for(&state.films, location_id))
    }

    async fn insert_film(&self, location_id: i64, film: &Film) -> Result<(), DbError> {
        let mut state = self.state();
        state.attempt_insert()?;
        state.films.push((location_id, film.clone()));
        Ok(())
    }
}

fn rows_for<T: Clone>(rows: &[(i64, T)], location_id: i64) -> Vec<T> {
    rows.iter()
        .filter(|(id, _)| *id == location_id)
        .map(|(_, row)| row.clone())
        .collect()
}

/// Canned provider responses. A `None` payload answers with a 503.
#[derive(Default)]
pub struct UpstreamState {
    pub geocode: Option<GeocodeResponse>,
    pub forecast: Option<ForecastResponse>,
    pub businesses: Option<BusinessSearchResponse>,
    pub films: Option<MovieSearchResponse>,
    pub calls: HashMap<&'static str, usize>,
    pub film_searches: Vec<String>,
}

#[derive(Clone, Default)]
pub struct FakeUpstream {
    state: Arc<Mutex<UpstreamState>>,
    geocode_barrier: Option<Arc<Barrier>>,
}

impl FakeUpstream {
    pub fn state(&self) -> MutexGuard<'_, UpstreamState> {
        self.state.lock().unwrap()
    }

    pub fn calls(&self, api: &str) -> usize {
        self.state().calls.get(api).copied().unwrap_or(0)
    }

    /// Hold every geocode call until `n` callers are waiting.
    pub fn with_geocode_barrier(mut self, n: usize) -> Self {
        self.geocode_barrier = Some(Arc::new(Barrier::new(n)));
        self
    }

    fn answer<T>(
        &self,
        api: &'static str,
        pick: impl Fn(&UpstreamState) -> Option<T>,
    ) -> Result<T, UpstreamError> {
        let mut state = self.state();
        *state.calls.entry(api).or_default() += 1;
        pick(&*state).ok_or(UpstreamError::Status { api, status: 503 })
    }
}

#[async_trait]
impl Upstream for FakeUpstream {
    async fn geocode(&self, _query: &str) -> Result<GeocodeResponse, UpstreamError> {
        let answer = self.answer("geocode", |s| s.geocode.clone());
        if let Some(barrier) = &self.geocode_barrier {
            barrier.wait().await;
        }
        answer
    }

    async fn forecast(&self, _latitude: f64, _longitude: f64) -> Result<ForecastResponse, UpstreamError> {
        self.answer("forecast", |s| s.forecast.clone())
    }

    async fn businesses(
        &self,
        _latitude: f64,
        _longitude: f64,
    ) -> Result<BusinessSearchResponse, UpstreamError> {
        self.answer("business", |s| s.businesses.clone())
    }

    async fn films(&self, search: &str) -> Result<MovieSearchResponse, UpstreamError> {
        self.state().film_searches.push(search.to_string());
        self.answer("movies", |s| s.films.clone())
    }
}

/// Issue a GET and decode the JSON body.
pub async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null);
    (status, body)
}

pub fn payload<T: serde::de::DeserializeOwned>(value: serde_json::Value) -> T {
    serde_json::from_value(value).unwrap()
}
