//! Database layer - connection pool, schema, and repositories
//!
//! # Design Principles
//!
//! - Connection pool, acquired per query - no shared long-lived connection
//! - Cache hit means "at least one row for the key"
//! - No transactions: dependent rows are written independently

pub mod migrations;
pub mod pool;
pub mod repos;
pub mod store;

pub use pool::{create_pool, create_pool_with_options, DEFAULT_MAX_CONNECTIONS};
pub use repos::DbError;
pub use store::{CacheStore, PgStore};
