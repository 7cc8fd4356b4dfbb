//! Location repository
//!
//! - find: exact match on the search query, first row wins
//! - insert: RETURNING id, no conflict handling

use cityscout_core::{NewPlace, Place};
use sqlx::{PgPool, Row};

use super::DbError;

/// Location repository
pub struct LocationRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> LocationRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Find a stored place by its exact search query.
    ///
    /// Duplicate rows can exist after racing misses; the oldest one is returned.
    pub async fn find_by_query(&self, query: &str) -> Result<Option<Place>, DbError> {
        let row = sqlx::query(
            r#"
            SELECT id, search_query, formatted_query, latitude, longitude
            FROM locations
            WHERE search_query = $1
            ORDER BY id
            LIMIT 1
            "#,
        )
        .bind(query)
        .fetch_optional(self.pool)
        .await?;

        Ok(row.map(|r| Place {
            id: r.get("id"),
            search_query: r.get("search_query"),
            formatted_query: r.get("formatted_query"),
            latitude: r.get("latitude"),
            longitude: r.get("longitude"),
        }))
    }

    /// Insert a geocoded place and return it with its generated id.
    pub async fn insert(&self, place: NewPlace) -> Result<Place, DbError> {
        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO locations (search_query, formatted_query, latitude, longitude)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(&place.search_query)
        .bind(&place.formatted_query)
        .bind(place.latitude)
        .bind(place.longitude)
        .fetch_one(self.pool)
        .await?;

        Ok(place.with_id(id))
    }
}
