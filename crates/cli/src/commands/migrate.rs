//! Database migration command.
//!
//! # Usage
//!
//! ```bash
//! luna-cli migrate
//! ```
//!
//! # Environment Variables
//!
//! - `STOREFRONT_DATABASE_URL` - `PostgreSQL` connection string (falls back to `DATABASE_URL`)
//!
//! # Migration Files
//!
//! Storefront migrations live in `crates/storefront/migrations/`. The
//! tower-sessions table is created by `PostgresStore::migrate`.

use tower_sessions_sqlx_store::PostgresStore;
use tracing::info;

use luna_rituals_storefront::db;

/// Errors raised while migrating.
#[derive(Debug, thiserror::Error)]
pub enum MigrationError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

/// Run storefront database migrations and create the session table.
///
/// # Errors
///
/// Returns an error if the database URL is missing, the connection fails, or
/// a migration fails.
pub async fn storefront() -> Result<(), Box<dyn std::error::Error>> {
    let database_url = super::database_url()?;

    info!("Connecting to storefront database...");
    let pool = db::create_pool(&database_url)
        .await
        .map_err(MigrationError::from)?;

    info!("Running storefront migrations...");
    sqlx::migrate!("../storefront/migrations")
        .run(&pool)
        .await
        .map_err(MigrationError::from)?;

    info!("Creating session store table...");
    PostgresStore::new(pool)
        .migrate()
        .await
        .map_err(MigrationError::from)?;

    info!("Storefront migrations complete!");
    Ok(())
}
