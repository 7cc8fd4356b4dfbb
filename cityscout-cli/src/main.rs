//! cityscout CLI - place lookups with a Postgres-backed cache
//!
//! Subcommands:
//! - `serve`: run the HTTP API (location, weather, yelp, movies)
//! - `migrate`: create the cache tables and exit

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod config;
mod tracing_setup;

#[derive(Parser, Debug)]
#[command(
    name = "cityscout",
    author,
    version,
    about = "Location, weather, restaurant, and movie lookups with a Postgres cache"
)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP API server (creates tables first)
    Serve(commands::serve::ServeArgs),
    /// Create the cache tables and exit
    Migrate(commands::migrate::MigrateArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    // Before parsing so clap `env` fallbacks see .env values
    config::load_dotenv();
    let cli = Cli::parse();

    tracing_setup::init(&tracing_setup::TracingConfig { debug: cli.debug })?;

    match cli.command {
        Commands::Serve(args) => commands::run_serve(args).await?,
        Commands::Migrate(args) => commands::run_migrate(args).await?,
    }
    Ok(())
}
