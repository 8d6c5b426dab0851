use dioxus::prelude::*;

use super::{layout, render};
use crate::routes;

pub fn not_found() -> String {
    render(layout(
        None,
        "Страница не найдена",
        rsx! {
            h1 { "Страница не найдена" }
            p { "Запрошенная страница не существует." }
            a { href: routes::HOME, "На главную" }
        },
    ))
}

pub fn server_error() -> String {
    render(layout(
        None,
        "Ошибка сервера",
        rsx! {
            h1 { "Ошибка сервера" }
            p { "Что-то пошло не так. Попробуйте повторить запрос позже." }
        },
    ))
}
