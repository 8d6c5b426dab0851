use std::sync::Arc;

use api::db::PgStore;
use api::settings;
use axum::routing::get;
use axum::Router;
use store::{MemoryStore, NoteStore, UserStore};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use tower_sessions::cookie::SameSite;
use tower_sessions::{Expiry, SessionManagerLayer, SessionStore};

use crate::handlers::{self, notes, users};
use crate::routes;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub notes: Arc<dyn NoteStore>,
    pub users: Arc<dyn UserStore>,
}

impl AppState {
    pub fn new(notes: Arc<dyn NoteStore>, users: Arc<dyn UserStore>) -> Self {
        Self { notes, users }
    }

    pub fn postgres(store: PgStore) -> Self {
        Self::new(Arc::new(store.clone()), Arc::new(store))
    }

    pub fn in_memory(store: MemoryStore) -> Self {
        Self::new(Arc::new(store.clone()), Arc::new(store))
    }
}

/// Build the application router.
///
/// `sessions` is the backing store for the session cookie: PostgreSQL in the
/// server binary, `tower_sessions::MemoryStore` in tests.
pub fn router<S>(state: AppState, sessions: S, config: &settings::Session) -> Router
where
    S: SessionStore + Clone,
{
    let session_layer = SessionManagerLayer::new(sessions)
        .with_secure(config.secure)
        .with_same_site(SameSite::Lax)
        .with_expiry(Expiry::OnInactivity(time::Duration::days(
            config.expiry_days,
        )));

    Router::new()
        .route(routes::HOME, get(notes::home))
        .route(routes::LIST, get(notes::list))
        .route(routes::ADD, get(notes::add_page).post(notes::add))
        .route(routes::SUCCESS, get(notes::success))
        .route(routes::EDIT, get(notes::edit_page).post(notes::edit))
        .route(routes::DELETE, get(notes::delete_page).post(notes::delete))
        .route(routes::DETAIL, get(notes::detail))
        .route(routes::LOGIN, get(users::login_page).post(users::login))
        .route(routes::LOGOUT, get(users::logout).post(users::logout))
        .route(routes::SIGNUP, get(users::signup_page).post(users::signup))
        .fallback(handlers::not_found)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(session_layer),
        )
        .with_state(state)
}
