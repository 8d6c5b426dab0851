//! # Domain models for notes and their authors
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`Note`] | A stored note. Carries its numeric `id` (insertion order), the `title`, body `text`, the unique URL `slug`, and the owning `author_id`. |
//! | [`NoteDraft`] | The validated fields used to create or update a note. The author is supplied separately by the caller, never by the form. |
//! | [`User`] | A stored account, including its Argon2 PHC password hash. Never leaves the server. |
//! | [`UserInfo`] | The client-safe projection of a [`User`] (id + username) used by views and session lookups. |
//!
//! These types are `Serialize + Deserialize` so they can be logged or
//! rendered without extra conversion layers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Maximum length of a note title, in characters.
pub const TITLE_MAX_LENGTH: usize = 100;

/// Maximum length of a note slug, in characters.
pub const SLUG_MAX_LENGTH: usize = 100;

/// Maximum length of a username, in characters.
pub const USERNAME_MAX_LENGTH: usize = 150;

/// A note owned by exactly one author.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Note {
    pub id: i64,
    pub title: String,
    pub text: String,
    /// Unique, URL-safe token: "zagolovok"
    pub slug: String,
    pub author_id: i64,
    pub created_at: DateTime<Utc>,
}

impl Note {
    /// Whether `user_id` owns this note.
    pub fn is_authored_by(&self, user_id: i64) -> bool {
        self.author_id == user_id
    }
}

/// Validated note fields, ready to be persisted.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NoteDraft {
    pub title: String,
    pub text: String,
    pub slug: String,
}

/// Full user record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Convert to UserInfo for rendering.
    pub fn to_info(&self) -> UserInfo {
        UserInfo {
            id: self.id,
            username: self.username.clone(),
        }
    }
}

/// User information safe to hand to views.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: i64,
    pub username: String,
}
