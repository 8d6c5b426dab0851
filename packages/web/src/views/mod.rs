//! HTML pages.
//!
//! Every page is an `rsx!` tree wrapped in [`layout`] and rendered to a
//! string by [`render`]. The builders are plain functions rather than
//! components: pages are rendered once per request and never re-run.

pub mod errors;
pub mod notes;
pub mod users;

use dioxus::prelude::*;
use store::UserInfo;

use crate::routes;

const STYLE: &str = "
body { font-family: -apple-system, BlinkMacSystemFont, Helvetica, Arial, sans-serif; color: #37352f; margin: 0; }
header { border-bottom: 1px solid #e9e9e7; padding: 0.75rem 2rem; }
header nav { display: flex; gap: 1rem; align-items: center; }
main { padding: 2rem; max-width: 720px; }
.errorlist { color: #eb5757; padding-left: 1rem; }
.username { color: #787774; }
";

/// Render a page inside the doctype and `<html>` shell.
pub fn render(page: Element) -> String {
    format!(
        "<!DOCTYPE html><html lang=\"ru\">{}</html>",
        dioxus_ssr::render_element(page)
    )
}

/// Page chrome: head, navigation for `user`, then `content`.
pub fn layout(user: Option<&UserInfo>, title: &str, content: Element) -> Element {
    let nav = match user {
        Some(user) => rsx! {
            a { href: routes::LIST, "Мои заметки" }
            a { href: routes::ADD, "Добавить заметку" }
            span { class: "username", "{user.username}" }
            form { method: "post", action: routes::LOGOUT,
                button { r#type: "submit", "Выйти" }
            }
        },
        None => rsx! {
            a { href: routes::LOGIN, "Войти" }
            a { href: routes::SIGNUP, "Регистрация" }
        },
    };

    rsx! {
        head {
            meta { charset: "utf-8" }
            title { "{title}" }
            style { {STYLE} }
        }
        body {
            header {
                nav {
                    a { href: routes::HOME, "Заметки" }
                    {nav}
                }
            }
            main { {content} }
        }
    }
}

/// Error messages above a field, if any.
pub fn errorlist(errors: &[String]) -> Element {
    rsx! {
        if !errors.is_empty() {
            ul { class: "errorlist",
                for error in errors.iter() {
                    li { "{error}" }
                }
            }
        }
    }
}

/// Labelled single-line input with its errors.
pub fn input_field(
    label: &str,
    name: &str,
    kind: &str,
    value: &str,
    errors: &[String],
) -> Element {
    let id = format!("id_{name}");
    rsx! {
        p {
            {errorlist(errors)}
            label {
                "{label}"
                input { r#type: "{kind}", name: "{name}", id: "{id}", value: "{value}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_wraps_page_in_html_shell() {
        let html = render(layout(None, "Заметки", rsx! { p { "Привет" } }));
        assert!(html.starts_with("<!DOCTYPE html><html lang=\"ru\"><head>"));
        assert!(html.ends_with("</body></html>"));
        assert!(html.contains("<title>Заметки</title>"));
        assert!(html.contains("<p>Привет</p>"));
    }
}
