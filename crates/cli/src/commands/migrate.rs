//! Database migration command.
//!
//! Migration files live in `crates/server/migrations/`. The server never
//! applies them on startup; this command is the only migration path.

use catalog_server::config::CatalogConfig;
use catalog_server::db;

use super::CliError;

/// Run catalog database migrations.
///
/// # Errors
///
/// Returns `CliError` if configuration loading, the database connection or a
/// migration fails.
pub async fn run() -> Result<(), CliError> {
    let config = CatalogConfig::from_env()?;

    tracing::info!("Connecting to catalog database...");
    let pool = db::create_pool(&config.database_url).await?;

    tracing::info!("Running catalog migrations...");
    sqlx::migrate!("../server/migrations").run(&pool).await?;

    tracing::info!("Catalog migrations complete");
    Ok(())
}
