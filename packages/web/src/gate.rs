//! Owner-only access to a single note.
//!
//! A note that exists but belongs to someone else is reported exactly like a
//! note that does not exist, so other users cannot probe for slugs.

use store::{Note, NoteStore, UserInfo};

use crate::error::HttpError;

#[derive(Debug, Clone, PartialEq)]
pub enum Access {
    Granted(Note),
    Missing,
    Foreign,
}

impl Access {
    pub fn decide(note: Option<Note>, requester: &UserInfo) -> Self {
        match note {
            Some(note) if note.is_authored_by(requester.id) => Access::Granted(note),
            Some(_) => Access::Foreign,
            None => Access::Missing,
        }
    }

    pub fn into_note(self) -> Result<Note, HttpError> {
        match self {
            Access::Granted(note) => Ok(note),
            Access::Missing | Access::Foreign => Err(HttpError::NotFound),
        }
    }
}

/// Fetch the note behind `slug` on behalf of `requester`.
pub async fn owned_note(
    notes: &dyn NoteStore,
    requester: &UserInfo,
    slug: &str,
) -> Result<Note, HttpError> {
    let access = Access::decide(notes.get_by_slug(slug).await?, requester);
    if access == Access::Foreign {
        tracing::debug!(slug, user_id = requester.id, "note hidden from non-author");
    }
    access.into_note()
}
