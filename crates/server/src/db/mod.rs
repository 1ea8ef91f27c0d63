//! Database operations for the inventory `PostgreSQL` store.
//!
//! ## Tables
//!
//! - `product` - Inventory records (name, quantity, timestamps)
//!
//! # Migrations
//!
//! Migrations are stored in `crates/server/migrations/`, embedded at build
//! time and run via:
//! ```bash
//! cargo run -p inventory-cli -- migrate
//! ```
//! The server never migrates on startup.

pub mod products;

use std::time::Duration;

use secrecy::ExposeSecret;
use sqlx::PgPool;
use sqlx::migrate::{MigrateError, Migrator};
use sqlx::postgres::PgPoolOptions;

pub use inventory_core::RepositoryError;
pub use products::PgProductRepository;

/// Embedded schema migrations.
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Create a `PostgreSQL` connection pool with sensible defaults.
///
/// # Arguments
///
/// * `database_url` - `PostgreSQL` connection string (wrapped in `SecretString`)
///
/// # Errors
///
/// Returns `sqlx::Error` if the connection cannot be established.
pub async fn create_pool(database_url: &secrecy::SecretString) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .min_connections(1)
        .acquire_timeout(Duration::from_secs(10))
        .connect(database_url.expose_secret())
        .await
}

/// Apply any pending migrations.
///
/// # Errors
///
/// Returns `MigrateError` if a migration fails or the applied history does not
/// match the embedded files.
pub async fn run_migrations(pool: &PgPool) -> Result<(), MigrateError> {
    MIGRATOR.run(pool).await
}
