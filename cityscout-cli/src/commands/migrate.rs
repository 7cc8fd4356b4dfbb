//! Schema-only command

use anyhow::{Context, Result};
use clap::Parser;

use cityscout_server::db::{create_pool_with_options, migrations};

use crate::config::DatabaseArgs;

/// Arguments for the migrate command
#[derive(Parser, Debug)]
pub struct MigrateArgs {
    #[command(flatten)]
    pub database: DatabaseArgs,
}

/// Create the cache tables and exit
pub async fn run_migrate(args: MigrateArgs) -> Result<()> {
    let pool = create_pool_with_options(&args.database.database_url, args.database.max_connections)
        .await
        .context("Failed to create database pool")?;

    migrations::run(&pool)
        .await
        .context("Failed to run migrations")?;

    pool.close().await;
    Ok(())
}
