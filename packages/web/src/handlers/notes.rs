use api::{FormError, FormErrors, NoteForm};
use axum::extract::rejection::FormRejection;
use axum::extract::{Path, State};
use axum::response::{Html, IntoResponse, Response};
use axum::Form;
use store::{Note, UserInfo};

use crate::app::AppState;
use crate::error::HttpError;
use crate::extract::{CurrentUser, LoginRequired};
use crate::gate::owned_note;
use crate::handlers::found;
use crate::{routes, views};

pub async fn home(CurrentUser(user): CurrentUser) -> Html<String> {
    Html(views::notes::home(user.as_ref()))
}

pub async fn list(
    State(state): State<AppState>,
    LoginRequired(user): LoginRequired,
) -> Result<Html<String>, HttpError> {
    let notes = state.notes.list_by_author(user.id).await?;
    Ok(Html(views::notes::list(&user, &notes)))
}

pub async fn success(LoginRequired(user): LoginRequired) -> Html<String> {
    Html(views::notes::success(&user))
}

pub async fn detail(
    State(state): State<AppState>,
    LoginRequired(user): LoginRequired,
    Path(slug): Path<String>,
) -> Result<Html<String>, HttpError> {
    let note = owned_note(state.notes.as_ref(), &user, &slug).await?;
    Ok(Html(views::notes::detail(&user, &note)))
}

pub async fn add_page(LoginRequired(user): LoginRequired) -> Html<String> {
    Html(views::notes::form(
        &user,
        None,
        &NoteForm::default(),
        &FormErrors::new(),
    ))
}

pub async fn add(
    State(state): State<AppState>,
    LoginRequired(user): LoginRequired,
    Form(form): Form<NoteForm>,
) -> Result<Response, HttpError> {
    match save(&state, &user, &form, None).await {
        Ok(note) => {
            tracing::info!(note_id = note.id, slug = %note.slug, author_id = user.id, "note created");
            Ok(found(routes::SUCCESS))
        }
        Err(FormError::Invalid(errors)) => {
            Ok(Html(views::notes::form(&user, None, &form, &errors)).into_response())
        }
        Err(FormError::Api(err)) => Err(err.into()),
    }
}

pub async fn edit_page(
    State(state): State<AppState>,
    LoginRequired(user): LoginRequired,
    Path(slug): Path<String>,
) -> Result<Html<String>, HttpError> {
    let note = owned_note(state.notes.as_ref(), &user, &slug).await?;
    Ok(Html(views::notes::form(
        &user,
        Some(&note),
        &NoteForm::from_note(&note),
        &FormErrors::new(),
    )))
}

pub async fn edit(
    State(state): State<AppState>,
    LoginRequired(user): LoginRequired,
    Path(slug): Path<String>,
    form: Result<Form<NoteForm>, FormRejection>,
) -> Result<Response, HttpError> {
    // Ownership is decided before the body is looked at.
    let note = owned_note(state.notes.as_ref(), &user, &slug).await?;
    let Form(form) = match form {
        Ok(form) => form,
        Err(rejection) => return Ok(rejection.into_response()),
    };
    match save(&state, &user, &form, Some(&note)).await {
        Ok(updated) => {
            tracing::info!(note_id = updated.id, slug = %updated.slug, "note updated");
            Ok(found(routes::SUCCESS))
        }
        Err(FormError::Invalid(errors)) => {
            Ok(Html(views::notes::form(&user, Some(&note), &form, &errors)).into_response())
        }
        Err(FormError::Api(err)) => Err(err.into()),
    }
}

pub async fn delete_page(
    State(state): State<AppState>,
    LoginRequired(user): LoginRequired,
    Path(slug): Path<String>,
) -> Result<Html<String>, HttpError> {
    let note = owned_note(state.notes.as_ref(), &user, &slug).await?;
    Ok(Html(views::notes::delete(&user, &note)))
}

pub async fn delete(
    State(state): State<AppState>,
    LoginRequired(user): LoginRequired,
    Path(slug): Path<String>,
) -> Result<Response, HttpError> {
    let note = owned_note(state.notes.as_ref(), &user, &slug).await?;
    state.notes.delete(note.id).await?;
    tracing::info!(note_id = note.id, slug = %note.slug, "note deleted");
    Ok(found(routes::SUCCESS))
}

/// Validate `form` and write it, as a new note or over `instance`.
async fn save(
    state: &AppState,
    author: &UserInfo,
    form: &NoteForm,
    instance: Option<&Note>,
) -> Result<Note, FormError> {
    let draft = form
        .clean(state.notes.as_ref(), instance.map(|note| note.id))
        .await?;

    let note = match instance {
        Some(note) => state.notes.update(note.id, draft).await?,
        None => state.notes.create(author.id, draft).await?,
    };
    Ok(note)
}
