//! Command-line options for the `post_tracker` binary.

use clap::{Parser, Subcommand};

use crate::config::constants::{
    DB_MAX_CONNECTIONS, DEFAULT_TABLE_NAME, ENV_DATABASE_URL, ENV_TABLE_NAME,
};
use crate::config::types::{LogFormat, LogLevel, StoreConfig};

/// Command-line options.
///
/// # Examples
///
/// ```bash
/// # Create the table if it does not exist yet
/// DATABASE_URL=postgres://localhost/mirror post_tracker init
///
/// # Start from an empty table
/// post_tracker --table vk_posts --recreate-table init
///
/// # Show what still has to be forwarded
/// post_tracker pending --json
/// ```
#[derive(Debug, Parser)]
#[command(
    name = "post_tracker",
    about = "Tracks which mirrored posts were already delivered."
)]
pub struct Cli {
    /// PostgreSQL connection URL
    #[arg(long, env = ENV_DATABASE_URL, hide_env_values = true)]
    pub database_url: String,

    /// Table holding the post records
    #[arg(long = "table", env = ENV_TABLE_NAME, default_value = DEFAULT_TABLE_NAME)]
    pub table_name: String,

    /// Drop and recreate the table if it already exists
    #[arg(long)]
    pub recreate_table: bool,

    /// Maximum pooled database connections
    #[arg(long, default_value_t = DB_MAX_CONNECTIONS)]
    pub max_connections: u32,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// Operation to run
    #[command(subcommand)]
    pub command: Command,
}

/// Store operation to run.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Create the table, or recreate it with --recreate-table
    Init,
    /// Record a new, not yet delivered post
    Insert {
        /// Post id assigned by the source platform
        id: String,
        /// Message body
        text: String,
    },
    /// Mark a post as delivered
    Deliver {
        /// Post id assigned by the source platform
        id: String,
    },
    /// List ids of delivered posts
    Delivered {
        /// Print one JSON value per line
        #[arg(long)]
        json: bool,
    },
    /// List posts that still have to be delivered
    Pending {
        /// Print one JSON object per line
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    /// Splits out the part of the options the store itself consumes.
    pub fn store_config(&self) -> StoreConfig {
        StoreConfig {
            database_url: self.database_url.clone(),
            table_name: self.table_name.clone(),
            recreate_table: self.recreate_table,
            max_connections: self.max_connections,
        }
    }
}
