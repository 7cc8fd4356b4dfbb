//! Database connection pool management
//!
//! Every request acquires a connection from the pool for the duration of a
//! query and releases it on drop. There is no process-wide connection handle.

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

/// Default maximum connections for the pool.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Create a PostgreSQL connection pool.
///
/// # Errors
///
/// Returns an error if the initial connection fails.
///
/// # Example
///
/// ```ignore
/// let pool = create_pool("postgres://localhost/cityscout").await?;
/// ```
pub async fn create_pool(database_url: &str) -> Result<PgPool, sqlx::Error> {
    create_pool_with_options(database_url, DEFAULT_MAX_CONNECTIONS).await
}

/// Create a PostgreSQL connection pool with a custom connection limit.
pub async fn create_pool_with_options(
    database_url: &str,
    max_connections: u32,
) -> Result<PgPool, sqlx::Error> {
    tracing::debug!(max_connections, "Connecting to database");
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}

#[cfg(test)]
mod tests {
    use super::*;

    // Integration tests require a real database
    // Run with: DATABASE_URL=postgres://... cargo test -p cityscout-server -- --ignored

    #[tokio::test]
    #[ignore = "requires database"]
    async fn pool_acquires_connection() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = create_pool(&url).await.expect("pool creation failed");

        let result: (i32,) = sqlx::query_as("SELECT 1")
            .fetch_one(&pool)
            .await
            .expect("query failed");

        assert_eq!(result.0, 1);
    }
}
