//! Configuration constants.
//!
//! This module defines the defaults used by the store, the connection pool
//! and the CLI.

/// Table used when no name is configured.
pub const DEFAULT_TABLE_NAME: &str = "posts";

/// Maximum identifier length accepted by PostgreSQL (`NAMEDATALEN - 1`).
/// Longer names are silently truncated by the server, so they are rejected up front.
pub const MAX_TABLE_NAME_LEN: usize = 63;

// Connection pool
/// Default maximum number of pooled connections
pub const DB_MAX_CONNECTIONS: u32 = 5;
/// Seconds to wait for a free connection before failing the statement
pub const DB_ACQUIRE_TIMEOUT_SECS: u64 = 5;

// Environment variables read by the CLI
/// Connection URL fallback for `--database-url`
pub const ENV_DATABASE_URL: &str = "DATABASE_URL";
/// Table name fallback for `--table`
pub const ENV_TABLE_NAME: &str = "POST_TRACKER_TABLE";
