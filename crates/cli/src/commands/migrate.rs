//! Database migration command.
//!
//! Migration files live in `crates/api/migrations/` and are embedded at
//! compile time, so the binary carries its own schema history.

use brewbox_api::db;

use super::CliError;

/// Run the API database migrations.
///
/// # Errors
///
/// Returns `CliError` if the database URL is missing, the connection fails,
/// or a migration fails.
pub async fn run() -> Result<(), CliError> {
    let database_url = super::database_url()?;

    tracing::info!("Connecting to database...");
    let pool = db::create_pool(&database_url).await?;

    tracing::info!("Running migrations...");
    sqlx::migrate!("../api/migrations").run(&pool).await?;

    tracing::info!("Migrations complete!");
    Ok(())
}
