//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `post_tracker` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - User-facing output formatting
//!
//! Each subcommand runs exactly one store operation.

use std::process;

use anyhow::{Context, Result};
use clap::Parser;

use post_tracker::config::{Cli, Command};
use post_tracker::initialization::init_logger_with;
use post_tracker::{init_db_pool, PostRecord, RecordStore};

#[tokio::main]
async fn main() -> Result<()> {
    // DATABASE_URL usually lives in .env next to the pipeline
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    init_logger_with(cli.log_level.clone().into(), cli.log_format.clone())
        .context("Failed to initialize logger")?;

    if let Err(e) = run(cli).await {
        eprintln!("post_tracker error: {:#}", e);
        process::exit(1);
    }
    Ok(())
}

async fn run(cli: Cli) -> Result<()> {
    let config = cli.store_config();
    let pool = init_db_pool(&config.database_url, config.max_connections)
        .await
        .context("Failed to open database pool")?;
    let store = RecordStore::from_config(pool, &config)?;

    match cli.command {
        Command::Init => {
            let status = store
                .ensure_table()
                .await
                .with_context(|| format!("Failed to prepare table {}", store.table_name()))?;
            if status.is_fresh() {
                println!("Table {}: {} (empty)", store.table_name(), status);
            } else {
                println!("Table {}: {}", store.table_name(), status);
            }
        }
        Command::Insert { id, text } => {
            store
                .insert(&PostRecord::new(id.as_str(), text))
                .await
                .with_context(|| format!("Failed to insert post {id}"))?;
        }
        Command::Deliver { id } => {
            let rows = store
                .mark_delivered(&id)
                .await
                .with_context(|| format!("Failed to mark post {id} delivered"))?;
            if rows == 0 {
                log::warn!("No post with id {id} in table {}", store.table_name());
            }
        }
        Command::Delivered { json } => {
            let mut ids: Vec<String> = store.list_delivered().await?.into_iter().collect();
            ids.sort();
            for id in ids {
                if json {
                    println!("{}", serde_json::to_string(&id)?);
                } else {
                    println!("{id}");
                }
            }
        }
        Command::Pending { json } => {
            for record in store.list_pending().await? {
                if json {
                    println!("{}", serde_json::to_string(&record)?);
                } else {
                    println!("{}\t{}", record.id, record.text);
                }
            }
        }
    }

    Ok(())
}
