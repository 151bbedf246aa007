//! Record store over a single post table.
//!
//! Every operation issues its statement(s) against the injected pool and
//! returns; nothing is cached between calls and no transactions are opened.
//! Failures are logged and returned with the statement text attached.

use std::collections::HashSet;

use log::{debug, error, info};
use sqlx::postgres::PgPool;
use sqlx::Row;

use crate::config::StoreConfig;
use crate::error_handling::StoreError;
use crate::storage::models::{PostRecord, TableStatus};
use crate::storage::queries;
use crate::storage::table_name::TableName;

/// Data access for one table of post records.
///
/// # Example
///
/// ```no_run
/// use post_tracker::{init_db_pool, PostRecord, RecordStore};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let pool = init_db_pool("postgres://localhost/mirror", 5).await?;
/// let store = RecordStore::new(pool, "vk_posts", false)?;
/// store.ensure_table().await?;
///
/// store.insert(&PostRecord::new("1", "hello")).await?;
/// for post in store.list_pending().await? {
///     // forward post.text, then:
///     store.mark_delivered(&post.id).await?;
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct RecordStore {
    pool: PgPool,
    table: TableName,
    recreate_table: bool,
}

impl RecordStore {
    /// Creates a store over `table_name`.
    ///
    /// `recreate_table` makes [`ensure_table`](Self::ensure_table) drop an
    /// existing table and start empty.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::InvalidTableName` if the name is not a plain identifier.
    pub fn new(pool: PgPool, table_name: &str, recreate_table: bool) -> Result<Self, StoreError> {
        let table = TableName::parse(table_name)?;
        Ok(Self {
            pool,
            table,
            recreate_table,
        })
    }

    /// Creates a store from the table settings in `config`.
    pub fn from_config(pool: PgPool, config: &StoreConfig) -> Result<Self, StoreError> {
        Self::new(pool, &config.table_name, config.recreate_table)
    }

    /// Validated, lowercased table name.
    pub fn table_name(&self) -> &TableName {
        &self.table
    }

    /// Whether `ensure_table` drops an existing table.
    pub fn recreate_table(&self) -> bool {
        self.recreate_table
    }

    /// The injected connection pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Makes sure the table exists.
    ///
    /// - absent: creates it ([`TableStatus::Created`])
    /// - present and `recreate_table`: drops and creates it ([`TableStatus::Recreated`])
    /// - present otherwise: does nothing ([`TableStatus::AlreadyPresent`])
    ///
    /// # Errors
    ///
    /// `StoreError::Query` if a statement fails, `StoreError::Decode` if the
    /// existence check result cannot be read.
    pub async fn ensure_table(&self) -> Result<TableStatus, StoreError> {
        let exists = self.table_exists().await?;

        if exists && !self.recreate_table {
            debug!("Table {} already exists, leaving it untouched.", self.table);
            return Ok(TableStatus::AlreadyPresent);
        }

        if exists {
            self.execute(queries::drop_table(&self.table)).await?;
            info!("Dropped table {}.", self.table);
        }

        self.execute(queries::create_table(&self.table)).await?;

        if exists {
            info!("Recreated table {}.", self.table);
            Ok(TableStatus::Recreated)
        } else {
            info!("Created table {}.", self.table);
            Ok(TableStatus::Created)
        }
    }

    /// Inserts a new record.
    ///
    /// The key column is an integer, so the id is stored in canonical numeric
    /// form: `"007"` and `" 12 "` are read back as `"7"` and `"12"`, and
    /// collide with `"7"` and `"12"`. Ids outside the `INTEGER` range are
    /// rejected.
    ///
    /// # Errors
    ///
    /// `StoreError::Query` on duplicate ids, ids the key column cannot hold,
    /// or connection failures.
    pub async fn insert(&self, record: &PostRecord) -> Result<(), StoreError> {
        let query = queries::insert_post(&self.table);

        sqlx::query(&query)
            .bind(&record.id)
            .bind(&record.text)
            .bind(record.is_posted)
            .execute(&self.pool)
            .await
            .map_err(|e| self.query_failed(query.as_str(), e))?;

        debug!("Inserted post {} into {}.", record.id, self.table);
        Ok(())
    }

    /// Flags the record with `id` as delivered.
    ///
    /// An unknown id is not an error; the returned count of updated rows is
    /// `0` in that case. Marking an already delivered record again leaves it
    /// delivered.
    ///
    /// # Errors
    ///
    /// `StoreError::Query` if the update fails.
    pub async fn mark_delivered(&self, id: &str) -> Result<u64, StoreError> {
        let query = queries::mark_delivered(&self.table);

        let result = sqlx::query(&query)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| self.query_failed(query.as_str(), e))?;

        let rows = result.rows_affected();
        debug!("Marked post {id} delivered in {} ({rows} row(s)).", self.table);
        Ok(rows)
    }

    /// Returns the ids of all delivered records.
    ///
    /// # Errors
    ///
    /// `StoreError::Query` if the select fails, `StoreError::Decode` if a row
    /// cannot be read.
    pub async fn list_delivered(&self) -> Result<HashSet<String>, StoreError> {
        let query = queries::select_delivered(&self.table);

        let rows = sqlx::query(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| self.query_failed(query.as_str(), e))?;

        let mut ids = HashSet::with_capacity(rows.len());
        for row in &rows {
            let id: String = row.try_get(0).map_err(|e| self.decode_failed(e))?;
            ids.insert(id);
        }

        Ok(ids)
    }

    /// Returns every record that has not been delivered yet.
    ///
    /// # Errors
    ///
    /// `StoreError::Query` if the select fails, `StoreError::Decode` if a row
    /// cannot be read.
    pub async fn list_pending(&self) -> Result<Vec<PostRecord>, StoreError> {
        let query = queries::select_pending(&self.table);

        let rows = sqlx::query(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| self.query_failed(query.as_str(), e))?;

        let mut records = Vec::with_capacity(rows.len());
        for row in &rows {
            let record = PostRecord {
                id: row.try_get(0).map_err(|e| self.decode_failed(e))?,
                text: row.try_get(1).map_err(|e| self.decode_failed(e))?,
                is_posted: false,
            };
            records.push(record);
        }

        Ok(records)
    }

    async fn table_exists(&self) -> Result<bool, StoreError> {
        let row = sqlx::query(queries::TABLE_EXISTS)
            .bind(self.table.as_str())
            .fetch_one(&self.pool)
            .await
            .map_err(|e| self.query_failed(queries::TABLE_EXISTS, e))?;

        row.try_get::<bool, _>(0).map_err(|e| self.decode_failed(e))
    }

    async fn execute(&self, query: String) -> Result<(), StoreError> {
        sqlx::query(&query)
            .execute(&self.pool)
            .await
            .map_err(|e| self.query_failed(query.as_str(), e))?;
        Ok(())
    }

    fn query_failed(&self, query: &str, e: sqlx::Error) -> StoreError {
        error!("Query on table {} failed: {e}", self.table);
        StoreError::query(query, e)
    }

    fn decode_failed(&self, e: sqlx::Error) -> StoreError {
        error!("Failed to read row from table {}: {e}", self.table);
        StoreError::Decode(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::test_helpers::lazy_pool;

    #[tokio::test]
    async fn test_new_validates_table_name() {
        let result = RecordStore::new(lazy_pool(), "posts; DROP TABLE posts", false);
        assert!(matches!(result, Err(StoreError::InvalidTableName { .. })));
    }

    #[tokio::test]
    async fn test_new_keeps_settings() {
        let store = RecordStore::new(lazy_pool(), "VK_Posts", true).unwrap();
        assert_eq!(store.table_name().as_str(), "vk_posts");
        assert!(store.recreate_table());
    }

    #[tokio::test]
    async fn test_from_config() {
        let config = StoreConfig {
            table_name: "mirror".to_string(),
            ..Default::default()
        };
        let store = RecordStore::from_config(lazy_pool(), &config).unwrap();
        assert_eq!(store.table_name().as_str(), "mirror");
        assert!(!store.recreate_table());
    }

    #[tokio::test]
    async fn test_from_config_rejects_empty_name() {
        let config = StoreConfig {
            table_name: String::new(),
            ..Default::default()
        };
        assert!(RecordStore::from_config(lazy_pool(), &config).is_err());
    }
}
