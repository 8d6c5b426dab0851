//! Request extractors for the logged-in user.

use api::auth::SESSION_USER_ID_KEY;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use store::UserInfo;
use tower_sessions::Session;

use crate::app::AppState;
use crate::error::HttpError;

/// The user attached to the session, if any.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub Option<UserInfo>);

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = HttpError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let session = Session::from_request_parts(parts, state)
            .await
            .map_err(|(_, message)| HttpError::Internal(message.to_string()))?;

        let Some(user_id) = session.get::<i64>(SESSION_USER_ID_KEY).await? else {
            return Ok(Self(None));
        };

        match state.users.get_user(user_id).await? {
            Some(user) => Ok(Self(Some(user.to_info()))),
            None => {
                // Account is gone; drop the stale session.
                tracing::debug!(user_id, "session refers to a missing user");
                session.flush().await?;
                Ok(Self(None))
            }
        }
    }
}

/// A logged-in user. Anonymous requests are redirected to the login page
/// with the requested path and query as `next`.
#[derive(Debug, Clone)]
pub struct LoginRequired(pub UserInfo);

impl FromRequestParts<AppState> for LoginRequired {
    type Rejection = HttpError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        match CurrentUser::from_request_parts(parts, state).await? {
            CurrentUser(Some(user)) => Ok(Self(user)),
            CurrentUser(None) => {
                let next = parts
                    .uri
                    .path_and_query()
                    .map(|pq| pq.as_str().to_string())
                    .unwrap_or_else(|| parts.uri.path().to_string());
                Err(HttpError::LoginRequired { next })
            }
        }
    }
}
