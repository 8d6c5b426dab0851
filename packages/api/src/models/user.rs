//! # User rows
//!
//! [`UserRow`] is the complete database row from the `users` table. It derives
//! [`sqlx::FromRow`] so it can be loaded directly from queries:
//!
//! - `id` — primary key (`BIGSERIAL`).
//! - `username` — unique display name, also the login.
//! - `password_hash` — Argon2id PHC string.
//! - `created_at` — audit timestamp.
//!
//! [`UserRow::into_user`] converts it into the storage-agnostic [`store::User`].

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use store::User;

/// Full user record from the database.
#[derive(Debug, Clone, FromRow)]
pub struct UserRow {
    pub id: i64,
    pub username: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

impl UserRow {
    pub fn into_user(self) -> User {
        User {
            id: self.id,
            username: self.username,
            password_hash: self.password_hash,
            created_at: self.created_at,
        }
    }
}
