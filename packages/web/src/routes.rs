//! Named routes.
//!
//! Route names follow the `namespace:name` convention (`notes:edit`,
//! `users:login`) so that pages and tests can build URLs without repeating
//! path literals.

use std::fmt;

pub const HOME: &str = "/";
pub const LIST: &str = "/notes/";
pub const ADD: &str = "/add/";
pub const SUCCESS: &str = "/done/";
pub const EDIT: &str = "/edit/{slug}/";
pub const DELETE: &str = "/delete/{slug}/";
pub const DETAIL: &str = "/note/{slug}/";
pub const LOGIN: &str = "/auth/login/";
pub const LOGOUT: &str = "/auth/logout/";
pub const SIGNUP: &str = "/auth/signup/";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    List,
    Add,
    Success,
    Edit { slug: String },
    Delete { slug: String },
    Detail { slug: String },
    Login,
    Logout,
    Signup,
}

impl Route {
    pub fn name(&self) -> &'static str {
        match self {
            Route::Home => "notes:home",
            Route::List => "notes:list",
            Route::Add => "notes:add",
            Route::Success => "notes:success",
            Route::Edit { .. } => "notes:edit",
            Route::Delete { .. } => "notes:delete",
            Route::Detail { .. } => "notes:detail",
            Route::Login => "users:login",
            Route::Logout => "users:logout",
            Route::Signup => "users:signup",
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Home => HOME.to_string(),
            Route::List => LIST.to_string(),
            Route::Add => ADD.to_string(),
            Route::Success => SUCCESS.to_string(),
            Route::Edit { slug } => with_slug(EDIT, slug),
            Route::Delete { slug } => with_slug(DELETE, slug),
            Route::Detail { slug } => with_slug(DETAIL, slug),
            Route::Login => LOGIN.to_string(),
            Route::Logout => LOGOUT.to_string(),
            Route::Signup => SIGNUP.to_string(),
        }
    }

    /// Look a route up by name. Slug routes take the slug as their only
    /// argument; `None` for an unknown name or a wrong argument count.
    pub fn reverse(name: &str, args: &[&str]) -> Option<String> {
        let route = match (name, args) {
            ("notes:home", []) => Route::Home,
            ("notes:list", []) => Route::List,
            ("notes:add", []) => Route::Add,
            ("notes:success", []) => Route::Success,
            ("notes:edit", [slug]) => Route::Edit {
                slug: slug.to_string(),
            },
            ("notes:delete", [slug]) => Route::Delete {
                slug: slug.to_string(),
            },
            ("notes:detail", [slug]) => Route::Detail {
                slug: slug.to_string(),
            },
            ("users:login", []) => Route::Login,
            ("users:logout", []) => Route::Logout,
            ("users:signup", []) => Route::Signup,
            _ => return None,
        };
        Some(route.path())
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// Fill the `{slug}` segment of a mounted route pattern.
fn with_slug(pattern: &str, slug: &str) -> String {
    pattern.replace("{slug}", slug)
}

pub fn edit(slug: &str) -> String {
    Route::Edit {
        slug: slug.to_string(),
    }
    .path()
}

pub fn delete(slug: &str) -> String {
    Route::Delete {
        slug: slug.to_string(),
    }
    .path()
}

pub fn detail(slug: &str) -> String {
    Route::Detail {
        slug: slug.to_string(),
    }
    .path()
}

/// `/auth/login/?next=<next>`, with `next` percent-encoded except for `/`.
pub fn login_redirect(next: &str) -> String {
    let encoded = urlencoding::encode(next).replace("%2F", "/");
    format!("{LOGIN}?next={encoded}")
}

/// Where to go after logging in: `next` when it is a path on this site,
/// otherwise the home page.
pub fn safe_next(next: Option<&str>) -> String {
    match next.map(str::trim) {
        Some(next) if next.starts_with('/') && !next.starts_with("//") && !next.contains('\\') => {
            next.to_string()
        }
        _ => HOME.to_string(),
    }
}
