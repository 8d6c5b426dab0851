//! Note rows from the `notes` table.

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use store::Note;

#[derive(Debug, Clone, FromRow)]
pub struct NoteRow {
    pub id: i64,
    pub title: String,
    pub text: String,
    pub slug: String,
    pub author_id: i64,
    pub created_at: DateTime<Utc>,
}

impl NoteRow {
    pub fn into_note(self) -> Note {
        Note {
            id: self.id,
            title: self.title,
            text: self.text,
            slug: self.slug,
            author_id: self.author_id,
            created_at: self.created_at,
        }
    }
}
