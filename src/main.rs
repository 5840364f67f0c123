//! airbnb-listings - sample_airbnb reports and cleanup
//!
//! Runs one of two flows against the `sample_airbnb` MongoDB dataset.
//!
//! ## Architecture
//!
//! - `cli` - Command-line arguments (clap)
//! - `config` - Environment configuration
//! - `database` - MongoDB integration and the `ListingStore` seam
//! - `commands` - The cheapest-suburb report and the cleanup flow
//! - `utils` - Date helpers

mod cli;
mod commands;
mod config;
mod database;
mod error;
mod utils;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use cli::Cli;
use commands::Task;
use config::Config;
use database::{Database, ListingRepository};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file first (before anything else)
    dotenvy::dotenv().ok();

    // Logs go to stderr, stdout carries the report
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("airbnb_listings=info,mongodb=warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let format = cli.output_format();
    let task = Task::from_command(cli.command, format)?;

    let config = Config::from_env()?;
    info!(
        "Using {}.{}",
        config.mongodb_database, config.listings_collection
    );

    info!("Connecting to MongoDB...");
    let db = Database::connect(&config.mongodb_uri, &config.mongodb_database).await?;
    let listings = ListingRepository::new(&db, &config.listings_collection);

    let outcome = task.run(&listings, &mut std::io::stdout().lock()).await;
    drop(listings);

    // Always release the client, whatever the flow returned
    db.close().await;

    // anyhow prints the error chain to stderr and exits 1
    Ok(outcome?)
}
