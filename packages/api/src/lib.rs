//! # API crate — server-side services for the notes application
//!
//! Everything the web layer needs besides HTTP plumbing lives here.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`auth`] | Argon2id password hashing, signup/login forms, the session key for the logged-in user |
//! | [`db`] | PostgreSQL pool, migrations and the `PgStore` backend |
//! | [`error`] | The crate-wide [`Error`] type |
//! | [`forms`] | Note form validation: required fields, slug derivation and uniqueness |
//! | [`models`] | Database rows (`UserRow`, `NoteRow`) and their conversion into `store` models |
//! | [`settings`] | Layered configuration (defaults, `config.toml`, `NOTES__*` environment) |

pub mod auth;
pub mod db;
pub mod error;
pub mod forms;
pub mod models;
pub mod settings;

pub use error::{Error, Result};
pub use forms::{FormError, FormErrors, NoteForm, WARNING};
pub use settings::Settings;
pub use store::{Note, NoteDraft, NoteStore, User, UserInfo, UserStore};
