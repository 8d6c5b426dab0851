//! Request handlers.

pub mod notes;
pub mod users;

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};

use crate::error::HttpError;

/// `302 Found` to `location`.
pub fn found(location: &str) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, location.to_string())]).into_response()
}

pub async fn not_found() -> HttpError {
    HttpError::NotFound
}
