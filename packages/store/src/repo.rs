//! # Storage traits for notes and users
//!
//! Every read and write made by the web layer goes through [`NoteStore`] and
//! [`UserStore`], so the same request handlers work against PostgreSQL in
//! production and against [`crate::MemoryStore`] in tests.
//!
//! ## [`NoteStore`]
//!
//! | Method | Description |
//! |--------|-------------|
//! | [`list_by_author`](NoteStore::list_by_author) | Notes owned by one user, ascending by `id`. |
//! | [`get_by_slug`](NoteStore::get_by_slug) | Any note by slug, regardless of owner. |
//! | [`slug_exists`](NoteStore::slug_exists) | Uniqueness probe, optionally ignoring the note being edited. |
//! | [`create`](NoteStore::create) / [`update`](NoteStore::update) / [`delete`](NoteStore::delete) | Mutations; a slug clash is reported as [`StoreError::SlugTaken`]. |
//! | [`count`](NoteStore::count) | Total number of notes. |
//!
//! ## [`UserStore`]
//!
//! Account creation (unique username) and lookups by id or username.

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{Note, NoteDraft, User};

/// Errors reported by storage backends.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Another note already uses this slug.
    #[error("slug already taken: {0}")]
    SlugTaken(String),

    /// Another account already uses this username.
    #[error("username already taken: {0}")]
    UsernameTaken(String),

    /// The row to update or delete does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// Backend failure (connection, query, decoding).
    #[error("storage error: {0}")]
    Backend(String),
}

/// Persistence for notes.
#[async_trait]
pub trait NoteStore: Send + Sync {
    async fn list_by_author(&self, author_id: i64) -> Result<Vec<Note>, StoreError>;

    async fn get_by_slug(&self, slug: &str) -> Result<Option<Note>, StoreError>;

    /// Whether some note other than `except_id` uses `slug`.
    async fn slug_exists(&self, slug: &str, except_id: Option<i64>) -> Result<bool, StoreError>;

    async fn create(&self, author_id: i64, draft: NoteDraft) -> Result<Note, StoreError>;

    async fn update(&self, id: i64, draft: NoteDraft) -> Result<Note, StoreError>;

    async fn delete(&self, id: i64) -> Result<(), StoreError>;

    async fn count(&self) -> Result<i64, StoreError>;
}

/// Persistence for user accounts.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn create_user(&self, username: &str, password_hash: &str) -> Result<User, StoreError>;

    async fn get_user(&self, id: i64) -> Result<Option<User>, StoreError>;

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, StoreError>;
}
