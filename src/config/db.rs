// src/config/db.rs
// DOCUMENTATION: Database connection pool initialization
// PURPOSE: Build the PostgreSQL pool every repository runs on

use crate::config::Config;
use sqlx::postgres::{PgPool, PgPoolOptions};
use std::time::Duration;

/// Initialize the PostgreSQL connection pool
/// DOCUMENTATION: Sized from configuration. This service's transactions are
/// short CRUD and reorder work, so idle connections are dropped quickly and
/// one connection stays warm for the health probe. A test query runs before
/// startup continues so a bad DATABASE_URL fails fast instead of on the
/// first request
pub async fn init_db_pool(config: &Config) -> Result<PgPool, sqlx::Error> {
    // The URL may carry credentials, so only the pool size is logged
    log::info!(
        "Connecting to PostgreSQL (max {} connections, acquire timeout {}s)",
        config.db_max_connections,
        config.db_connection_timeout
    );

    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .min_connections(1)
        .acquire_timeout(Duration::from_secs(config.db_connection_timeout))
        // Idle connections drop after 10 minutes, recycle after an hour
        .idle_timeout(Duration::from_secs(600))
        .max_lifetime(Duration::from_secs(3600))
        .connect(&config.database_url)
        .await?;

    sqlx::query("SELECT 1").execute(&pool).await?;

    log::info!("Database pool ready");
    Ok(pool)
}
