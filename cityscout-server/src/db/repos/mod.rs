//! Repository implementations for the cache tables
//!
//! Each repository follows these patterns:
//! - Parameterized queries only
//! - Lookups by key, inserts without conflict handling
//! - Rows are mapped into `cityscout_core` records

pub mod locations;
pub mod movies;
pub mod restaurants;
pub mod weathers;

pub use locations::LocationRepo;
pub use movies::MovieRepo;
pub use restaurants::RestaurantRepo;
pub use weathers::WeatherRepo;

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),
}
