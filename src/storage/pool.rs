//! Database connection pool management.
//!
//! This module opens the PostgreSQL connection pool handed to the record
//! store. The store never opens connections itself.

use std::time::Duration;

use log::{error, info};
use sqlx::postgres::{PgPool, PgPoolOptions};

use crate::config::DB_ACQUIRE_TIMEOUT_SECS;
use crate::error_handling::DatabaseError;

/// Opens a connection pool and checks that the server is reachable.
///
/// Waiting for a free connection is bounded by `DB_ACQUIRE_TIMEOUT_SECS`, so
/// an exhausted pool fails the statement instead of blocking indefinitely.
pub async fn init_db_pool(
    database_url: &str,
    max_connections: u32,
) -> Result<PgPool, DatabaseError> {
    let pool = PgPoolOptions::new()
        .max_connections(max_connections.max(1))
        .acquire_timeout(Duration::from_secs(DB_ACQUIRE_TIMEOUT_SECS))
        .connect(database_url)
        .await
        .map_err(|e| {
            error!("Failed to connect to database: {e}");
            DatabaseError::SqlError(e)
        })?;

    info!(
        "Connected to database (max {} connections).",
        max_connections.max(1)
    );
    Ok(pool)
}
