//! Error type definitions.
//!
//! This module defines all error types used throughout the crate.

use log::SetLoggerError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

/// Error types for connection pool setup.
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// The connection URL could not be used to open a pool.
    #[error("SQL error: {0}")]
    SqlError(#[from] sqlx::Error),
}

/// Error types for record store operations.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Preparing or executing a statement failed.
    ///
    /// Carries the statement text so the failing query shows up in logs.
    #[error("Query: {query}: {source}")]
    Query {
        /// Statement that failed
        query: String,
        /// Driver error
        #[source]
        source: sqlx::Error,
    },

    /// A result row could not be read into typed fields.
    #[error("Row decode error: {0}")]
    Decode(#[source] sqlx::Error),

    /// The configured table name is not a safe SQL identifier.
    #[error("Invalid table name {name:?}: {reason}")]
    InvalidTableName {
        /// Name as supplied by the caller
        name: String,
        /// Which rule it broke
        reason: &'static str,
    },
}

impl StoreError {
    /// Wraps a driver error with the statement that produced it.
    pub(crate) fn query(query: impl Into<String>, source: sqlx::Error) -> Self {
        StoreError::Query {
            query: query.into(),
            source,
        }
    }

    /// Returns the statement text for query failures.
    pub fn failed_query(&self) -> Option<&str> {
        match self {
            StoreError::Query { query, .. } => Some(query),
            _ => None,
        }
    }
}
