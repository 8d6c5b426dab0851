use api::auth::{authenticate, register, LoginForm, SignupForm, SESSION_USER_ID_KEY};
use api::{FormError, FormErrors};
use axum::extract::{Query, State};
use axum::response::{Html, IntoResponse, Response};
use axum::Form;
use serde::Deserialize;
use tower_sessions::Session;

use crate::app::AppState;
use crate::error::HttpError;
use crate::extract::CurrentUser;
use crate::handlers::found;
use crate::{routes, views};

#[derive(Debug, Default, Deserialize)]
pub struct NextQuery {
    pub next: Option<String>,
}

pub async fn login_page(
    CurrentUser(user): CurrentUser,
    Query(query): Query<NextQuery>,
) -> Html<String> {
    let form = LoginForm {
        next: query.next,
        ..LoginForm::default()
    };
    Html(views::users::login(user.as_ref(), &form, &FormErrors::new()))
}

pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<LoginForm>,
) -> Result<Response, HttpError> {
    match authenticate(state.users.as_ref(), &form).await {
        Ok(user) => {
            // New id on privilege change.
            session.cycle_id().await?;
            session.insert(SESSION_USER_ID_KEY, user.id).await?;
            tracing::info!(user_id = user.id, "user logged in");
            Ok(found(&routes::safe_next(form.next.as_deref())))
        }
        Err(FormError::Invalid(errors)) => {
            let form = LoginForm {
                password: String::new(),
                ..form
            };
            Ok(Html(views::users::login(None, &form, &errors)).into_response())
        }
        Err(FormError::Api(err)) => Err(err.into()),
    }
}

pub async fn logout(session: Session) -> Result<Html<String>, HttpError> {
    session.flush().await?;
    Ok(Html(views::users::logged_out()))
}

pub async fn signup_page(CurrentUser(user): CurrentUser) -> Html<String> {
    Html(views::users::signup(
        user.as_ref(),
        &SignupForm::default(),
        &FormErrors::new(),
    ))
}

pub async fn signup(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Form(form): Form<SignupForm>,
) -> Result<Response, HttpError> {
    match register(state.users.as_ref(), &form).await {
        Ok(_) => Ok(found(routes::LOGIN)),
        Err(FormError::Invalid(errors)) => {
            let form = SignupForm {
                password1: String::new(),
                password2: String::new(),
                ..form
            };
            Ok(Html(views::users::signup(user.as_ref(), &form, &errors)).into_response())
        }
        Err(FormError::Api(err)) => Err(err.into()),
    }
}
