//! Film repository

use cityscout_core::Film;
use sqlx::{PgPool, Row};

use super::DbError;

pub struct MovieRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> MovieRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn list_for_location(&self, location_id: i64) -> Result<Vec<Film>, DbError> {
        let rows = sqlx::query(
            r#"
            SELECT title, overview, average_votes, total_votes, image_url, popularity, released_on
            FROM movies
            WHERE location_id = $1
            ORDER BY id
            "#,
        )
        .bind(location_id)
        .fetch_all(self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|r| Film {
                title: r.get("title"),
                overview: r.get("overview"),
                average_votes: r.get("average_votes"),
                total_votes: r.get("total_votes"),
                image_url: r.get("image_url"),
                popularity: r.get("popularity"),
                released_on: r.get("released_on"),
            })
            .collect())
    }

    pub async fn insert(&self, location_id: i64, film: &Film) -> Result<(), DbError> {
        sqlx::query(
            r#"
            INSERT INTO movies
                (title, overview, average_votes, total_votes, image_url, popularity, released_on, location_id)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(&film.title)
        .bind(&film.overview)
        .bind(film.average_votes)
        .bind(film.total_votes)
        .bind(&film.image_url)
        .bind(film.popularity)
        .bind(&film.released_on)
        .bind(location_id)
        .execute(self.pool)
        .await?;

        Ok(())
    }
}
