//! Forecast day repository

use cityscout_core::ForecastDay;
use sqlx::{PgPool, Row};

use super::DbError;

pub struct WeatherRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> WeatherRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// All stored forecast days for a place, in insertion order.
    pub async fn list_for_location(&self, location_id: i64) -> Result<Vec<ForecastDay>, DbError> {
        let rows = sqlx::query(
            r#"
            SELECT forecast, time, created_at
            FROM weathers
            WHERE location_id = $1
            ORDER BY id
            "#,
        )
        .bind(location_id)
        .fetch_all(self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|r| ForecastDay {
                forecast: r.get("forecast"),
                time: r.get("time"),
                created_at: r.get("created_at"),
            })
            .collect())
    }

    pub async fn insert(&self, location_id: i64, day: &ForecastDay) -> Result<(), DbError> {
        sqlx::query(
            r#"
            INSERT INTO weathers (forecast, time, created_at, location_id)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(&day.forecast)
        .bind(&day.time)
        .bind(day.created_at)
        .bind(location_id)
        .execute(self.pool)
        .await?;

        Ok(())
    }
}
