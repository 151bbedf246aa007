//! Shared test helpers for storage module tests.

#[cfg(test)]
use sqlx::postgres::{PgPool, PgPoolOptions};

/// Creates a pool that never connects until a statement is issued.
/// Enough for tests that only exercise construction and validation.
#[cfg(test)]
pub fn lazy_pool() -> PgPool {
    PgPoolOptions::new()
        .max_connections(1)
        .connect_lazy("postgres://post_tracker@localhost/post_tracker_test")
        .expect("Failed to create lazy test pool")
}
