//! Error handling.
//!
//! Error types are split by where they come from:
//! - **Initialization**: logger setup
//! - **Database**: opening the connection pool
//! - **Store**: statements issued by the record store, annotated with the query text

mod types;

// Re-export public API
pub use types::{DatabaseError, InitializationError, StoreError};
