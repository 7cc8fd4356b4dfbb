//! Cache store seam used by the route handlers
//!
//! Handlers only see `CacheStore`; `PgStore` backs it with the repositories.
//! A place with at least one dependent row of a kind counts as cached for
//! that kind.

use async_trait::async_trait;
use cityscout_core::{Business, Film, ForecastDay, NewPlace, Place};
use sqlx::PgPool;

use super::repos::{DbError, LocationRepo, MovieRepo, RestaurantRepo, WeatherRepo};

#[async_trait]
pub trait CacheStore: Send + Sync + 'static {
    async fn find_place(&self, query: &str) -> Result<Option<Place>, DbError>;
    async fn insert_place(&self, place: NewPlace) -> Result<Place, DbError>;

    async fn forecast_days(&self, location_id: i64) -> Result<Vec<ForecastDay>, DbError>;
    async fn insert_forecast_day(&self, location_id: i64, day: &ForecastDay) -> Result<(), DbError>;

    async fn businesses(&self, location_id: i64) -> Result<Vec<Business>, DbError>;
    async fn insert_business(&self, location_id: i64, business: &Business) -> Result<(), DbError>;

    async fn films(&self, location_id: i64) -> Result<Vec<Film>, DbError>;
    async fn insert_film(&self, location_id: i64, film: &Film) -> Result<(), DbError>;
}

/// Postgres-backed cache store
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl CacheStore for PgStore {
    async fn find_place(&self, query: &str) -> Result<Option<Place>, DbError> {
        LocationRepo::new(&self.pool).find_by_query(query).await
    }

    async fn insert_place(&self, place: NewPlace) -> Result<Place, DbError> {
        LocationRepo::new(&self.pool).insert(place).await
    }

    async fn forecast_days(&self, location_id: i64) -> Result<Vec<ForecastDay>, DbError> {
        WeatherRepo::new(&self.pool).list_for_location(location_id).await
    }

    async fn insert_forecast_day(&self, location_id: i64, day: &ForecastDay) -> Result<(), DbError> {
        WeatherRepo::new(&self.pool).insert(location_id, day).await
    }

    async fn businesses(&self, location_id: i64) -> Result<Vec<Business>, DbError> {
        RestaurantRepo::new(&self.pool).list_for_location(location_id).await
    }

    async fn insert_business(&self, location_id: i64, business: &Business) -> Result<(), DbError> {
        RestaurantRepo::new(&self.pool).insert(location_id, business).await
    }

    async fn films(&self, location_id: i64) -> Result<Vec<Film>, DbError> {
        MovieRepo::new(&self.pool).list_for_location(location_id).await
    }

    async fn insert_film(&self, location_id: i64, film: &Film) -> Result<(), DbError> {
        MovieRepo::new(&self.pool).insert(location_id, film).await
    }
}
