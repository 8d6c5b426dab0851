#![allow(dead_code)]

use api::auth::hash_password;
use api::settings;
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use store::{MemoryStore, Note, NoteDraft, NoteStore, User, UserStore};
use tower::ServiceExt;
use web::AppState;

pub const PASSWORD: &str = "correct-horse-battery";

pub const AUTHOR: &str = "Великий автор";
pub const READER: &str = "Читатель Петя";

pub const TITLE: &str = "Заголовок";
pub const TEXT: &str = "Текст";
pub const SLUG: &str = "some_slug";

pub const NEW_TITLE: &str = "Новый заголовок";
pub const NEW_TEXT: &str = "Новый текст";
pub const NEW_SLUG: &str = "New_slug";

/// The application over an in-memory store, plus direct access to that store.
pub struct TestApp {
    pub router: Router,
    pub store: MemoryStore,
}

impl TestApp {
    pub fn new() -> Self {
        let store = MemoryStore::new();
        let router = web::router(
            AppState::in_memory(store.clone()),
            tower_sessions::MemoryStore::default(),
            &settings::Session::default(),
        );
        Self { router, store }
    }

    pub fn anonymous(&self) -> Client {
        Client {
            router: self.router.clone(),
            cookie: None,
        }
    }

    pub async fn create_user(&self, username: &str) -> User {
        let hash = hash_password(PASSWORD).unwrap();
        self.store.create_user(username, &hash).await.unwrap()
    }

    /// Create `username` and log in through the login form.
    pub async fn login(&self, username: &str) -> (User, Client) {
        let user = self.create_user(username).await;
        let mut client = self.anonymous();
        let response = client
            .post(
                web::routes::LOGIN,
                &[("username", username), ("password", PASSWORD)],
            )
            .await;
        assert_eq!(response.status, StatusCode::FOUND, "{}", response.body);
        client.cookie = Some(response.cookie.expect("login sets a session cookie"));
        (user, client)
    }

    pub async fn create_note(&self, author: &User, title: &str, text: &str, slug: &str) -> Note {
        self.store
            .create(
                author.id,
                NoteDraft {
                    title: title.to_string(),
                    text: text.to_string(),
                    slug: slug.to_string(),
                },
            )
            .await
            .unwrap()
    }

    pub async fn note_count(&self) -> i64 {
        self.store.count().await.unwrap()
    }

    pub async fn note(&self, slug: &str) -> Option<Note> {
        self.store.get_by_slug(slug).await.unwrap()
    }
}

/// Sends requests through the router, replaying the session cookie.
pub struct Client {
    router: Router,
    pub cookie: Option<String>,
}

impl Client {
    pub async fn get(&self, uri: &str) -> TestResponse {
        let request = self.request("GET", uri).body(Body::empty()).unwrap();
        self.send(request).await
    }

    pub async fn post(&self, uri: &str, form: &[(&str, &str)]) -> TestResponse {
        let body = form
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&");
        let request = self
            .request("POST", uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body))
            .unwrap();
        self.send(request).await
    }

    /// POST with no body and no content type.
    pub async fn post_empty(&self, uri: &str) -> TestResponse {
        let request = self.request("POST", uri).body(Body::empty()).unwrap();
        self.send(request).await
    }

    fn request(&self, method: &str, uri: &str) -> axum::http::request::Builder {
        let builder = Request::builder().method(method).uri(uri);
        match &self.cookie {
            Some(cookie) => builder.header(header::COOKIE, cookie),
            None => builder,
        }
    }

    async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let location = response
            .headers()
            .get(header::LOCATION)
            .map(|v| v.to_str().unwrap().to_string());
        let cookie = response
            .headers()
            .get(header::SET_COOKIE)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.split(';').next())
            .map(str::to_string);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();

        TestResponse {
            status,
            location,
            cookie,
            body: String::from_utf8(bytes.to_vec()).unwrap(),
        }
    }
}

#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub location: Option<String>,
    pub cookie: Option<String>,
    pub body: String,
}

/// `302` to `location`.
pub fn assert_redirects(response: &TestResponse, location: &str) {
    assert_eq!(response.status, StatusCode::FOUND, "{}", response.body);
    assert_eq!(response.location.as_deref(), Some(location));
}

pub fn url(name: &str, args: &[&str]) -> String {
    web::Route::reverse(name, args).unwrap()
}
