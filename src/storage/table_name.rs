//! Validated table names.
//!
//! PostgreSQL cannot bind identifiers as query parameters, so the table name
//! is interpolated into statement text. [`TableName`] is the only way a name
//! gets there: it accepts plain unquoted identifiers and nothing else.

use std::fmt;

use crate::config::MAX_TABLE_NAME_LEN;
use crate::error_handling::StoreError;

/// A table name that is safe to splice into SQL text.
///
/// Stored lowercased, matching how PostgreSQL folds unquoted identifiers and
/// how the name appears in `information_schema.tables`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TableName(String);

impl TableName {
    /// Validates `name` and returns it in folded form.
    ///
    /// Rules:
    /// - non-empty and at most [`MAX_TABLE_NAME_LEN`] bytes
    /// - first character is an ASCII letter or `_`
    /// - remaining characters are ASCII letters, digits or `_`
    ///
    /// # Errors
    ///
    /// Returns `StoreError::InvalidTableName` naming the broken rule.
    pub fn parse(name: &str) -> Result<Self, StoreError> {
        let invalid = |reason| StoreError::InvalidTableName {
            name: name.to_string(),
            reason,
        };

        let first = name.chars().next().ok_or_else(|| invalid("name is empty"))?;
        if name.len() > MAX_TABLE_NAME_LEN {
            return Err(invalid("name is longer than 63 bytes"));
        }
        if !(first.is_ascii_alphabetic() || first == '_') {
            return Err(invalid("name must start with an ASCII letter or '_'"));
        }
        if !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
            return Err(invalid("only ASCII letters, digits and '_' are allowed"));
        }

        Ok(TableName(name.to_ascii_lowercase()))
    }

    /// The folded name as it appears in SQL text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TableName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
