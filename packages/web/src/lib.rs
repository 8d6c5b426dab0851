//! # Web crate — HTTP surface of the notes application
//!
//! An axum router serving server-rendered HTML pages. Pages are built with
//! `rsx!` and rendered to strings through `dioxus-ssr`; sessions are kept by
//! `tower-sessions`.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`app`] | [`AppState`] and the router with its session and trace layers |
//! | [`routes`] | Named routes and URL building, including the login redirect |
//! | [`extract`] | `CurrentUser` / `LoginRequired` extractors |
//! | [`gate`] | Owner-only access to a single note |
//! | [`handlers`] | Request handlers for notes and accounts |
//! | [`views`] | HTML pages |
//! | [`error`] | [`HttpError`] and its mapping onto responses |

pub mod app;
pub mod error;
pub mod extract;
pub mod gate;
pub mod handlers;
pub mod routes;
pub mod views;

pub use app::{router, AppState};
pub use error::HttpError;
pub use routes::Route;
