//! HTTP error type for handlers and extractors.

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use store::StoreError;
use thiserror::Error;

use crate::handlers::found;
use crate::{routes, views};

#[derive(Debug, Error)]
pub enum HttpError {
    /// Missing page, or a note owned by someone else.
    #[error("not found")]
    NotFound,

    /// Anonymous request to a page that needs a user.
    #[error("login required to access {next}")]
    LoginRequired { next: String },

    #[error("internal error: {0}")]
    Internal(String),
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        match self {
            HttpError::NotFound => {
                (StatusCode::NOT_FOUND, Html(views::errors::not_found())).into_response()
            }
            HttpError::LoginRequired { next } => found(&routes::login_redirect(&next)),
            HttpError::Internal(message) => {
                tracing::error!(error = %message, "request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Html(views::errors::server_error()),
                )
                    .into_response()
            }
        }
    }
}

impl From<StoreError> for HttpError {
    fn from(err: StoreError) -> Self {
        HttpError::Internal(err.to_string())
    }
}

impl From<api::Error> for HttpError {
    fn from(err: api::Error) -> Self {
        HttpError::Internal(err.to_string())
    }
}

impl From<tower_sessions::session::Error> for HttpError {
    fn from(err: tower_sessions::session::Error) -> Self {
        HttpError::Internal(format!("session: {err}"))
    }
}
