//! Database connection pool and migrations.

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::error::Result;
use crate::settings;

/// Open a connection pool for the configured database.
pub async fn connect(settings: &settings::Database) -> Result<PgPool> {
    tracing::info!(
        host = %settings.host,
        port = settings.port,
        database = %settings.database,
        "connecting to database"
    );

    let pool = PgPoolOptions::new()
        .max_connections(settings.max_connections)
        .connect(&settings.url())
        .await?;
    Ok(pool)
}

/// Apply the embedded migrations in `packages/api/migrations`.
pub async fn run_migrations(pool: &PgPool) -> Result<()> {
    sqlx::migrate!("./migrations").run(pool).await?;
    Ok(())
}
