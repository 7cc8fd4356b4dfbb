//! Schema setup for the cache tables

use sqlx::PgPool;

use super::DbError;

/// Create the cache tables if they do not exist yet.
pub async fn run(pool: &PgPool) -> Result<(), DbError> {
    tracing::info!("Running cache migrations...");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS locations (
            id BIGSERIAL PRIMARY KEY,
            search_query TEXT NOT NULL,
            formatted_query TEXT NOT NULL,
            latitude DOUBLE PRECISION NOT NULL,
            longitude DOUBLE PRECISION NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS weathers (
            id BIGSERIAL PRIMARY KEY,
            forecast TEXT NOT NULL,
            time TEXT NOT NULL,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
            location_id BIGINT NOT NULL REFERENCES locations(id)
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS restaurants (
            id BIGSERIAL PRIMARY KEY,
            name TEXT NOT NULL,
            image_url TEXT NOT NULL,
            price TEXT,
            rating DOUBLE PRECISION NOT NULL,
            url TEXT NOT NULL,
            location_id BIGINT NOT NULL REFERENCES locations(id)
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS movies (
            id BIGSERIAL PRIMARY KEY,
            title TEXT NOT NULL,
            overview TEXT NOT NULL,
            average_votes DOUBLE PRECISION NOT NULL,
            total_votes BIGINT NOT NULL,
            image_url TEXT,
            popularity DOUBLE PRECISION NOT NULL,
            released_on TEXT,
            location_id BIGINT NOT NULL REFERENCES locations(id)
        )
        "#,
    )
    .execute(pool)
    .await?;

    create_indexes(pool).await?;

    tracing::info!("Cache migrations complete");
    Ok(())
}

async fn create_indexes(pool: &PgPool) -> Result<(), DbError> {
    // Lookup keys. No uniqueness: concurrent misses may insert twice.
    sqlx::query("CREATE INDEX IF NOT EXISTS idx_locations_search_query ON locations(search_query)")
        .execute(pool)
        .await?;

    for table in ["weathers", "restaurants", "movies"] {
        sqlx::query(&format!(
            "CREATE INDEX IF NOT EXISTS idx_{table}_location ON {table}(location_id)"
        ))
        .execute(pool)
        .await?;
    }

    Ok(())
}
