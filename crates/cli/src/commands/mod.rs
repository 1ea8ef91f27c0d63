//! CLI command implementations.
//!
//! # Environment Variables
//!
//! - `INVENTORY_DATABASE_URL` - `PostgreSQL` connection string (falls back to `DATABASE_URL`)

pub mod migrate;
pub mod products;

use sqlx::PgPool;
use thiserror::Error;

use inventory_core::InventoryError;
use inventory_server::config::{self, ConfigError};
use inventory_server::db;

/// Errors that can occur while running a command.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration is missing or invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Database connection error.
    #[error("Database connection error: {0}")]
    Database(#[from] sqlx::Error),

    /// Migration failed.
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// The product service refused or failed the operation.
    #[error(transparent)]
    Inventory(#[from] InventoryError),

    /// Output could not be encoded.
    #[error("Output error: {0}")]
    Output(#[from] serde_json::Error),
}

/// Connect to the database named by the environment.
///
/// # Errors
///
/// Returns `CliError::Config` if no database URL is set and
/// `CliError::Database` if the connection fails.
pub async fn connect() -> Result<PgPool, CliError> {
    let database_url = config::database_url_from_env()?;

    tracing::debug!("Connecting to database...");
    let pool = db::create_pool(&database_url).await?;

    Ok(pool)
}
