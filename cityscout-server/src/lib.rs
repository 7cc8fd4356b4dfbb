//! cityscout-server: place-keyed lookups over a Postgres cache
//!
//! Resolves place names to coordinates and serves weather, restaurant, and
//! movie data for them. Each result class is cached in its own table so the
//! rate-limited providers are called once per place.

pub mod db;
pub mod http;
pub mod upstream;

pub use db::{CacheStore, PgStore};
pub use http::{build_router, run_server, AppState, ServerConfig};
pub use upstream::{ApiKeys, HttpUpstream, Upstream, UpstreamConfig};
