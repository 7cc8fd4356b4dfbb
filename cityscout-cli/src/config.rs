//! Environment-backed configuration
//!
//! Values come from `.env` in the working directory, then the process
//! environment, then CLI flags (highest priority, via clap `env`).

use clap::Args;
use cityscout_server::{ApiKeys, UpstreamConfig};
use tracing::{debug, info};

/// Load `.env` from the current directory if present.
///
/// dotenvy never overwrites variables that are already set.
pub fn load_dotenv() {
    match dotenvy::dotenv() {
        Ok(path) => info!("Loaded configuration from {}", path.display()),
        Err(e) if e.not_found() => debug!("No .env file found, using environment only"),
        Err(e) => debug!("Failed to load .env: {}", e),
    }
}

/// Database connection settings
#[derive(Args, Debug, Clone)]
pub struct DatabaseArgs {
    /// Postgres connection string
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: String,

    /// Maximum pooled connections
    #[arg(long, env = "DB_MAX_CONNECTIONS", default_value_t = cityscout_server::db::DEFAULT_MAX_CONNECTIONS)]
    pub max_connections: u32,
}

/// Provider credentials and endpoints
#[derive(Args, Debug, Clone)]
pub struct UpstreamArgs {
    /// Geocoding API key
    #[arg(long, env = "GEOCODE_API_KEY", hide_env_values = true)]
    pub geocode_api_key: String,

    /// Forecast API key
    #[arg(long, env = "DARKSKY_API_KEY", hide_env_values = true)]
    pub darksky_api_key: String,

    /// Business search API key (sent as a bearer token)
    #[arg(long, env = "YELP_API_KEY", hide_env_values = true)]
    pub yelp_api_key: String,

    /// Movie search API key
    #[arg(long, env = "MOVIES_API_KEY", hide_env_values = true)]
    pub movies_api_key: String,

    /// Override the geocoding API base URL
    #[arg(long, env = "GEOCODE_BASE_URL", default_value = UpstreamConfig::DEFAULT_GEOCODE_BASE_URL)]
    pub geocode_base_url: String,

    /// Override the forecast API base URL
    #[arg(long, env = "DARKSKY_BASE_URL", default_value = UpstreamConfig::DEFAULT_FORECAST_BASE_URL)]
    pub darksky_base_url: String,

    /// Override the business search API base URL
    #[arg(long, env = "YELP_BASE_URL", default_value = UpstreamConfig::DEFAULT_BUSINESS_BASE_URL)]
    pub yelp_base_url: String,

    /// Override the movie search API base URL
    #[arg(long, env = "MOVIES_BASE_URL", default_value = UpstreamConfig::DEFAULT_MOVIES_BASE_URL)]
    pub movies_base_url: String,
}

impl From<UpstreamArgs> for UpstreamConfig {
    fn from(args: UpstreamArgs) -> Self {
        Self {
            keys: ApiKeys {
                geocode: args.geocode_api_key,
                forecast: args.darksky_api_key,
                business: args.yelp_api_key,
                movies: args.movies_api_key,
            },
            geocode_base_url: args.geocode_base_url,
            forecast_base_url: args.darksky_base_url,
            business_base_url: args.yelp_base_url,
            movies_base_url: args.movies_base_url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        upstream: UpstreamArgs,
    }

    #[test]
    fn test_load_dotenv_doesnt_panic() {
        load_dotenv();
    }

    #[test]
    fn test_upstream_args_map_to_config() {
        let cli = TestCli::parse_from([
            "test",
            "--geocode-api-key",
            "g",
            "--darksky-api-key",
            "d",
            "--yelp-api-key",
            "y",
            "--movies-api-key",
            "m",
            "--yelp-base-url",
            "http://localhost:9999",
        ]);
        let config = UpstreamConfig::from(cli.upstream);

        assert_eq!(config.keys.forecast, "d");
        assert_eq!(config.keys.business, "y");
        assert_eq!(config.business_base_url, "http://localhost:9999");
        assert_eq!(config.movies_base_url, "https://api.themoviedb.org");
    }
}
