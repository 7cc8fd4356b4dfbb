//! Upstream API clients
//!
//! One outbound GET per call. No retries, no timeouts: a hung provider only
//! delays the request that is waiting on it.

pub mod client;

use async_trait::async_trait;
use cityscout_core::payload::{
    BusinessSearchResponse, ForecastResponse, GeocodeResponse, MovieSearchResponse,
};

pub use client::HttpUpstream;

/// Businesses requested per search
pub const BUSINESS_PAGE_SIZE: u32 = 20;

/// Upstream call failure. Callers treat every variant the same way.
#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    #[error("{api} request failed: {source}")]
    Request {
        api: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("{api} returned status {status}")]
    Status { api: &'static str, status: u16 },

    #[error("{api} response could not be decoded: {source}")]
    Decode {
        api: &'static str,
        #[source]
        source: reqwest::Error,
    },
}

/// The four third-party providers behind the routes.
#[async_trait]
pub trait Upstream: Send + Sync + 'static {
    async fn geocode(&self, query: &str) -> Result<GeocodeResponse, UpstreamError>;
    async fn forecast(&self, latitude: f64, longitude: f64) -> Result<ForecastResponse, UpstreamError>;
    async fn businesses(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<BusinessSearchResponse, UpstreamError>;
    async fn films(&self, search: &str) -> Result<MovieSearchResponse, UpstreamError>;
}

/// One credential per provider
#[derive(Debug, Clone, Default)]
pub struct ApiKeys {
    pub geocode: String,
    pub forecast: String,
    pub business: String,
    pub movies: String,
}

/// Provider endpoints and credentials
#[derive(Debug, Clone)]
pub struct UpstreamConfig {
    pub keys: ApiKeys,
    pub geocode_base_url: String,
    pub forecast_base_url: String,
    pub business_base_url: String,
    pub movies_base_url: String,
}

impl UpstreamConfig {
    pub const DEFAULT_GEOCODE_BASE_URL: &'static str = "https://maps.googleapis.com";
    pub const DEFAULT_FORECAST_BASE_URL: &'static str = "https://api.darksky.net";
    pub const DEFAULT_BUSINESS_BASE_URL: &'static str = "https://api.yelp.com";
    pub const DEFAULT_MOVIES_BASE_URL: &'static str = "https://api.themoviedb.org";

    /// Production endpoints with the given keys
    pub fn new(keys: ApiKeys) -> Self {
        Self {
            keys,
            geocode_base_url: Self::DEFAULT_GEOCODE_BASE_URL.to_string(),
            forecast_base_url: Self::DEFAULT_FORECAST_BASE_URL.to_string(),
            business_base_url: Self::DEFAULT_BUSINESS_BASE_URL.to_string(),
            movies_base_url: Self::DEFAULT_MOVIES_BASE_URL.to_string(),
        }
    }

    /// Point every provider at one base URL (mock servers)
    pub fn with_base_url(keys: ApiKeys, base_url: &str) -> Self {
        Self {
            keys,
            geocode_base_url: base_url.to_string(),
            forecast_base_url: base_url.to_string(),
            business_base_url: base_url.to_string(),
            movies_base_url: base_url.to_string(),
        }
    }
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self::new(ApiKeys::default())
    }
}
