//! HTTP server command
//!
//! Connects the pool, ensures the schema, and runs the lookup routes.

use std::net::{IpAddr, SocketAddr};

use anyhow::{Context, Result};
use clap::Parser;

use cityscout_server::db::{create_pool_with_options, migrations};
use cityscout_server::{run_server, AppState, HttpUpstream, PgStore, ServerConfig, UpstreamConfig};

use crate::config::{DatabaseArgs, UpstreamArgs};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Interface to bind to
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: IpAddr,

    /// Port to listen on
    #[arg(long, short = 'p', env = "PORT", default_value_t = 3000)]
    pub port: u16,

    /// Map at most this many films per movie lookup (default: all results)
    #[arg(long, env = "MOVIES_MAX_RESULTS")]
    pub movies_max_results: Option<usize>,

    #[command(flatten)]
    pub database: DatabaseArgs,

    #[command(flatten)]
    pub upstream: UpstreamArgs,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let bind_addr = SocketAddr::new(args.host, args.port);
    tracing::info!("Starting cityscout server on {}", bind_addr);

    let pool = create_pool_with_options(&args.database.database_url, args.database.max_connections)
        .await
        .context("Failed to create database pool")?;
    migrations::run(&pool)
        .await
        .context("Failed to run migrations")?;

    let upstream = HttpUpstream::new(UpstreamConfig::from(args.upstream))
        .context("Failed to build upstream client")?;
    let state = AppState::new(PgStore::new(pool), upstream)
        .with_movies_max_results(args.movies_max_results);

    // Blocks until shutdown
    run_server(state, ServerConfig { bind_addr })
        .await
        .context("Server error")?;

    Ok(())
}
