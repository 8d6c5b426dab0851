//! Database row types and their conversions into the `store` models.

mod note;
mod user;

pub use note::NoteRow;
pub use user::UserRow;
