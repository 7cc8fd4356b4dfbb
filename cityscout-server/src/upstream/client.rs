//! reqwest-backed implementation of [`Upstream`]

use async_trait::async_trait;
use cityscout_core::payload::{
    BusinessSearchResponse, ForecastResponse, GeocodeResponse, MovieSearchResponse,
};
use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;

use super::{Upstream, UpstreamConfig, UpstreamError, BUSINESS_PAGE_SIZE};

/// HTTP client for the geocoding, forecast, business, and movie providers.
#[derive(Debug, Clone)]
pub struct HttpUpstream {
    http: reqwest::Client,
    config: UpstreamConfig,
}

impl HttpUpstream {
    pub fn new(config: UpstreamConfig) -> Result<Self, UpstreamError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("cityscout/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|source| UpstreamError::Request {
                api: "client",
                source,
            })?;
        Ok(Self { http, config })
    }

    fn url(base: &str, path: &str) -> String {
        format!("{}{}", base.trim_end_matches('/'), path)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        api: &'static str,
        request: RequestBuilder,
    ) -> Result<T, UpstreamError> {
        let response = request
            .send()
            .await
            .map_err(|source| UpstreamError::Request { api, source })?;

        let status = response.status();
        if !status.is_success() {
            return Err(UpstreamError::Status {
                api,
                status: status.as_u16(),
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|source| UpstreamError::Decode { api, source })
    }
}

#[async_trait]
impl Upstream for HttpUpstream {
    async fn geocode(&self, query: &str) -> Result<GeocodeResponse, UpstreamError> {
        let url = Self::url(&self.config.geocode_base_url, "/maps/api/geocode/json");
        tracing::debug!(query, "Geocoding place");

        let request = self
            .http
            .get(url)
            .query(&[("address", query), ("key", self.config.keys.geocode.as_str())]);
        self.get_json("geocode", request).await
    }

    async fn forecast(&self, latitude: f64, longitude: f64) -> Result<ForecastResponse, UpstreamError> {
        let url = Self::url(
            &self.config.forecast_base_url,
            &format!(
                "/forecast/{}/{},{}",
                self.config.keys.forecast, latitude, longitude
            ),
        );
        tracing::debug!(latitude, longitude, "Fetching forecast");

        self.get_json("forecast", self.http.get(url)).await
    }

    async fn businesses(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<BusinessSearchResponse, UpstreamError> {
        let url = Self::url(&self.config.business_base_url, "/v3/businesses/search");
        tracing::debug!(latitude, longitude, "Searching businesses");

        let request = self
            .http
            .get(url)
            .bearer_auth(&self.config.keys.business)
            .query(&[
                ("term", "restaurants".to_string()),
                ("latitude", latitude.to_string()),
                ("longitude", longitude.to_string()),
                ("limit", BUSINESS_PAGE_SIZE.to_string()),
            ]);
        self.get_json("business", request).await
    }

    async fn films(&self, search: &str) -> Result<MovieSearchResponse, UpstreamError> {
        let url = Self::url(&self.config.movies_base_url, "/3/search/movie");
        tracing::debug!(search, "Searching movies");

        let request = self
            .http
            .get(url)
            .query(&[("api_key", self.config.keys.movies.as_str()), ("query", search)]);
        self.get_json("movies", request).await
    }
}
