//! post_tracker library: delivery bookkeeping for mirrored posts
//!
//! A pipeline that copies posts from one platform to another (fetch from a
//! source feed, forward to a messaging channel) needs to remember which posts
//! were already forwarded. This library keeps that state in a PostgreSQL table:
//! it creates or recreates the table, inserts new posts, marks posts as
//! delivered and lists the delivered and pending sets.
//!
//! # Example
//!
//! ```no_run
//! use post_tracker::{init_db_pool, PostRecord, RecordStore, StoreConfig};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = StoreConfig {
//!     database_url: "postgres://localhost/mirror".to_string(),
//!     table_name: "vk_posts".to_string(),
//!     ..Default::default()
//! };
//!
//! let pool = init_db_pool(&config.database_url, config.max_connections).await?;
//! let store = RecordStore::from_config(pool, &config)?;
//! store.ensure_table().await?;
//!
//! let delivered = store.list_delivered().await?;
//! if !delivered.contains("1") {
//!     store.insert(&PostRecord::new("1", "hello")).await?;
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! Store operations are async and need a Tokio runtime.

#![warn(missing_docs)]

pub mod config;
mod error_handling;
pub mod initialization;
mod storage;

// Re-export public API
pub use config::{LogFormat, LogLevel, StoreConfig};
pub use error_handling::{DatabaseError, InitializationError, StoreError};
pub use storage::{init_db_pool, PostRecord, RecordStore, TableName, TableStatus};
