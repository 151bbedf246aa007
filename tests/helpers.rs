// Shared test helpers for tests that run against a live PostgreSQL server.
//
// Tests using these helpers are marked #[ignore] and need DATABASE_URL to point
// at a scratch database. Every test uses its own table so they can run in parallel.
//
// Tables are dropped at the end of a passing test only. A failing test leaves its
// pt_* table or schema behind; the next run with the same process id drops it
// before use, otherwise it has to be cleaned up by hand.

use std::str::FromStr;

use post_tracker::{init_db_pool, RecordStore};
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::PgPool;

fn database_url() -> String {
    let _ = dotenvy::dotenv();
    std::env::var("DATABASE_URL")
        .expect("DATABASE_URL must point at a scratch PostgreSQL database")
}

/// Opens a small pool against `DATABASE_URL`.
#[allow(dead_code)] // Used by other test files
pub async fn create_test_pool() -> PgPool {
    init_db_pool(&database_url(), 4)
        .await
        .expect("Failed to create test database pool")
}

/// Opens a pool whose connections resolve unqualified names through `search_path`.
#[allow(dead_code)]
pub async fn create_test_pool_with_search_path(search_path: &str) -> PgPool {
    let options = PgConnectOptions::from_str(&database_url())
        .expect("Invalid DATABASE_URL")
        .options([("search_path", search_path)]);
    PgPoolOptions::new()
        .max_connections(2)
        .connect_with(options)
        .await
        .expect("Failed to create test database pool")
}

/// Table name unique to this test and process.
#[allow(dead_code)]
pub fn test_table_name(label: &str) -> String {
    format!("pt_{}_{}", label, std::process::id())
}

/// Drops the test table if a previous run left it behind.
#[allow(dead_code)]
pub async fn drop_test_table(pool: &PgPool, table: &str) {
    sqlx::query(&format!("DROP TABLE IF EXISTS {table}"))
        .execute(pool)
        .await
        .expect("Failed to drop test table");
}

/// Creates a store over a clean, freshly created table.
#[allow(dead_code)]
pub async fn create_test_store(label: &str) -> RecordStore {
    let pool = create_test_pool().await;
    let table = test_table_name(label);
    drop_test_table(&pool, &table).await;

    let store = RecordStore::new(pool, &table, false).expect("valid test table name");
    store
        .ensure_table()
        .await
        .expect("Failed to create test table");
    store
}
