//! Business repository

use cityscout_core::Business;
use sqlx::{PgPool, Row};

use super::DbError;

pub struct RestaurantRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> RestaurantRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn list_for_location(&self, location_id: i64) -> Result<Vec<Business>, DbError> {
        let rows = sqlx::query(
            r#"
            SELECT name, image_url, price, rating, url
            FROM restaurants
            WHERE location_id = $1
            ORDER BY id
            "#,
        )
        .bind(location_id)
        .fetch_all(self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|r| Business {
                name: r.get("name"),
                image_url: r.get("image_url"),
                price: r.get("price"),
                rating: r.get("rating"),
                url: r.get("url"),
            })
            .collect())
    }

    pub async fn insert(&self, location_id: i64, business: &Business) -> Result<(), DbError> {
        sqlx::query(
            r#"
            INSERT INTO restaurants (name, image_url, price, rating, url, location_id)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(&business.name)
        .bind(&business.image_url)
        .bind(&business.price)
        .bind(business.rating)
        .bind(&business.url)
        .bind(location_id)
        .execute(self.pool)
        .await?;

        Ok(())
    }
}
