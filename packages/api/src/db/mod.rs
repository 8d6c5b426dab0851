//! # Database module — PostgreSQL persistence
//!
//! - [`connect`] — opens a [`sqlx::PgPool`] from [`crate::settings::Database`].
//! - [`run_migrations`] — applies the embedded migrations creating `users` and
//!   `notes` (`slug` is `UNIQUE`, notes cascade with their author).
//! - [`PgStore`] — the production [`store::NoteStore`] + [`store::UserStore`]
//!   backend built on that pool.

mod pool;
mod postgres;

pub use pool::{connect, run_migrations};
pub use postgres::PgStore;
