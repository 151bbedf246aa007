//! SQL statement text for the post table.
//!
//! Values are always bound as `$n` parameters. The only interpolated piece is
//! the table name, which has already been validated by [`TableName`].
//!
//! The key column is `SERIAL`, while post ids travel as strings, so ids are
//! cast explicitly on the way in and out.

use crate::storage::table_name::TableName;

/// Existence check against the catalog; binds the table name as `$1`.
///
/// Looks in `current_schema()`, the first existing schema on `search_path`,
/// which is where the unqualified statements below create and find the table.
pub const TABLE_EXISTS: &str = "SELECT EXISTS (
    SELECT 1
    FROM information_schema.tables
    WHERE table_schema = current_schema()
    AND table_name = $1
)";

pub fn create_table(table: &TableName) -> String {
    format!(
        "CREATE TABLE {table} (
    ID SERIAL PRIMARY KEY,
    Text TEXT,
    IsPosted BOOLEAN
)"
    )
}

pub fn drop_table(table: &TableName) -> String {
    format!("DROP TABLE {table}")
}

pub fn insert_post(table: &TableName) -> String {
    format!("INSERT INTO {table} (ID, Text, IsPosted) VALUES (CAST($1 AS INTEGER), $2, $3)")
}

pub fn mark_delivered(table: &TableName) -> String {
    format!("UPDATE {table} SET IsPosted = true WHERE ID = CAST($1 AS INTEGER)")
}

pub fn select_delivered(table: &TableName) -> String {
    format!("SELECT CAST(ID AS TEXT) FROM {table} WHERE IsPosted = true")
}

pub fn select_pending(table: &TableName) -> String {
    format!("SELECT CAST(ID AS TEXT), Text FROM {table} WHERE IsPosted = false")
}
