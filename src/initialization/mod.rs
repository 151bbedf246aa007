//! Process-level initialization.
//!
//! Only logging lives here; the connection pool is opened through
//! [`crate::storage::init_db_pool`].

mod logger;

pub use logger::init_logger_with;
