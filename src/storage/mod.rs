// storage/mod.rs
// Database operations module

pub mod models;
pub mod pool;
pub mod queries;
pub mod store;
pub mod table_name;
mod test_helpers;

// Re-export commonly used items
pub use models::{PostRecord, TableStatus};
pub use pool::init_db_pool;
pub use store::RecordStore;
pub use table_name::TableName;
