//! Errors raised by the server-side services.

use store::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("migration failed: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),

    #[error("password hashing failed: {0}")]
    PasswordHash(String),

    #[error("invalid settings: {0}")]
    Settings(#[from] config::ConfigError),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
