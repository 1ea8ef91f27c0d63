//! Database migration command.
//!
//! # Usage
//!
//! ```bash
//! inventory migrate
//! ```
//!
//! Migrations are embedded from `crates/server/migrations/`.

use sqlx::PgPool;

use inventory_server::db;

use super::CliError;

/// Apply pending migrations and return a summary line.
///
/// # Errors
///
/// Returns `CliError::Migration` if a migration fails.
pub async fn run(pool: &PgPool) -> Result<String, CliError> {
    tracing::info!("Running migrations...");
    db::run_migrations(pool).await?;

    let latest = db::MIGRATOR
        .iter()
        .map(|m| m.version)
        .max()
        .map_or_else(|| "none".to_string(), |v| v.to_string());

    tracing::info!(latest = %latest, "Migrations complete");
    Ok(format!("Migrations complete (latest version: {latest})"))
}
