//! PostgreSQL implementation of [`NoteStore`] and [`UserStore`].
//!
//! Unique violations are reported as [`StoreError::SlugTaken`] /
//! [`StoreError::UsernameTaken`] so that a race between two requests for the
//! same slug ends up as a form error rather than a 500.

use async_trait::async_trait;
use sqlx::PgPool;
use store::{Note, NoteDraft, NoteStore, StoreError, User, UserStore};

use crate::models::{NoteRow, UserRow};

const NOTE_COLUMNS: &str = "id, title, text, slug, author_id, created_at";
const USER_COLUMNS: &str = "id, username, password_hash, created_at";

#[derive(Clone, Debug)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db) if db.is_unique_violation())
}

fn backend(err: sqlx::Error) -> StoreError {
    StoreError::Backend(err.to_string())
}

#[async_trait]
impl NoteStore for PgStore {
    async fn list_by_author(&self, author_id: i64) -> Result<Vec<Note>, StoreError> {
        let rows: Vec<NoteRow> = sqlx::query_as(&format!(
            "SELECT {NOTE_COLUMNS} FROM notes WHERE author_id = $1 ORDER BY id"
        ))
        .bind(author_id)
        .fetch_all(&self.pool)
        .await
        .map_err(backend)?;

        Ok(rows.into_iter().map(NoteRow::into_note).collect())
    }

    async fn get_by_slug(&self, slug: &str) -> Result<Option<Note>, StoreError> {
        let row: Option<NoteRow> =
            sqlx::query_as(&format!("SELECT {NOTE_COLUMNS} FROM notes WHERE slug = $1"))
                .bind(slug)
                .fetch_optional(&self.pool)
                .await
                .map_err(backend)?;

        Ok(row.map(NoteRow::into_note))
    }

    async fn slug_exists(&self, slug: &str, except_id: Option<i64>) -> Result<bool, StoreError> {
        sqlx::query_scalar(
            "SELECT EXISTS (
                SELECT 1 FROM notes WHERE slug = $1 AND ($2::BIGINT IS NULL OR id <> $2)
             )",
        )
        .bind(slug)
        .bind(except_id)
        .fetch_one(&self.pool)
        .await
        .map_err(backend)
    }

    async fn create(&self, author_id: i64, draft: NoteDraft) -> Result<Note, StoreError> {
        let row: NoteRow = sqlx::query_as(&format!(
            "INSERT INTO notes (title, text, slug, author_id) VALUES ($1, $2, $3, $4)
             RETURNING {NOTE_COLUMNS}"
        ))
        .bind(&draft.title)
        .bind(&draft.text)
        .bind(&draft.slug)
        .bind(author_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                StoreError::SlugTaken(draft.slug.clone())
            } else {
                backend(e)
            }
        })?;

        Ok(row.into_note())
    }

    async fn update(&self, id: i64, draft: NoteDraft) -> Result<Note, StoreError> {
        let row: Option<NoteRow> = sqlx::query_as(&format!(
            "UPDATE notes SET title = $2, text = $3, slug = $4 WHERE id = $1
             RETURNING {NOTE_COLUMNS}"
        ))
        .bind(id)
        .bind(&draft.title)
        .bind(&draft.text)
        .bind(&draft.slug)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                StoreError::SlugTaken(draft.slug.clone())
            } else {
                backend(e)
            }
        })?;

        row.map(NoteRow::into_note)
            .ok_or_else(|| StoreError::NotFound(format!("note {id}")))
    }

    async fn delete(&self, id: i64) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM notes WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(backend)?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(format!("note {id}")));
        }
        Ok(())
    }

    async fn count(&self) -> Result<i64, StoreError> {
        sqlx::query_scalar("SELECT COUNT(*) FROM notes")
            .fetch_one(&self.pool)
            .await
            .map_err(backend)
    }
}

#[async_trait]
impl UserStore for PgStore {
    async fn create_user(&self, username: &str, password_hash: &str) -> Result<User, StoreError> {
        let row: UserRow = sqlx::query_as(&format!(
            "INSERT INTO users (username, password_hash) VALUES ($1, $2) RETURNING {USER_COLUMNS}"
        ))
        .bind(username)
        .bind(password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                StoreError::UsernameTaken(username.to_string())
            } else {
                backend(e)
            }
        })?;

        Ok(row.into_user())
    }

    async fn get_user(&self, id: i64) -> Result<Option<User>, StoreError> {
        let row: Option<UserRow> =
            sqlx::query_as(&format!("SELECT {USER_COLUMNS} FROM users WHERE id = $1"))
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .map_err(backend)?;

        Ok(row.map(UserRow::into_user))
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, StoreError> {
        let row: Option<UserRow> =
            sqlx::query_as(&format!("SELECT {USER_COLUMNS} FROM users WHERE username = $1"))
                .bind(username)
                .fetch_optional(&self.pool)
                .await
                .map_err(backend)?;

        Ok(row.map(UserRow::into_user))
    }
}
