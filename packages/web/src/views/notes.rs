use api::{FormErrors, NoteForm};
use dioxus::prelude::*;
use store::{Note, UserInfo};

use super::{errorlist, input_field, layout, render};
use crate::routes;

pub fn home(user: Option<&UserInfo>) -> String {
    render(layout(
        user,
        "Заметки",
        rsx! {
            h1 { "Заметки" }
            p { "Бесплатный сервис для ваших заметок. Записи видны только их автору." }
            if user.is_some() {
                p { a { href: routes::LIST, "Перейти к моим заметкам" } }
            } else {
                p {
                    a { href: routes::LOGIN, "Войдите" }
                    " или "
                    a { href: routes::SIGNUP, "зарегистрируйтесь" }
                    ", чтобы начать."
                }
            }
        },
    ))
}

pub fn list(user: &UserInfo, notes: &[Note]) -> String {
    render(layout(
        Some(user),
        "Мои заметки",
        rsx! {
            h1 { "Мои заметки" }
            if notes.is_empty() {
                p { "Заметок пока нет." }
            }
            ol { class: "notes",
                for note in notes.iter() {
                    li { key: "{note.id}",
                        a { href: routes::detail(&note.slug), "{note.title}" }
                    }
                }
            }
            a { href: routes::ADD, "Добавить заметку" }
        },
    ))
}

pub fn detail(user: &UserInfo, note: &Note) -> String {
    let created = note.created_at.format("%d.%m.%Y %H:%M").to_string();
    render(layout(
        Some(user),
        &note.title,
        rsx! {
            article {
                h1 { "{note.title}" }
                p { class: "created", "{created}" }
                div { class: "text", "{note.text}" }
            }
            p {
                a { href: routes::edit(&note.slug), "Редактировать" }
                " "
                a { href: routes::delete(&note.slug), "Удалить" }
            }
        },
    ))
}

/// Add page when `instance` is `None`, edit page otherwise.
pub fn form(
    user: &UserInfo,
    instance: Option<&Note>,
    form: &NoteForm,
    errors: &FormErrors,
) -> String {
    let (heading, action) = match instance {
        Some(note) => ("Редактировать заметку", routes::edit(&note.slug)),
        None => ("Добавить заметку", routes::ADD.to_string()),
    };
    let slug = form.slug.as_deref().unwrap_or_default();

    render(layout(
        Some(user),
        heading,
        rsx! {
            h1 { "{heading}" }
            form { method: "post", action: "{action}", id: "note-form",
                {errorlist(errors.non_field())}
                {input_field("Заголовок", "title", "text", &form.title, errors.field("title"))}
                p {
                    {errorlist(errors.field("text"))}
                    label {
                        "Текст"
                        textarea { name: "text", id: "id_text", rows: "10", "{form.text}" }
                    }
                }
                {input_field("Адрес для страницы с заметкой", "slug", "text", slug, errors.field("slug"))}
                p { class: "helptext",
                    "Разрешены только латинские буквы, цифры, дефис и подчёркивание. "
                    "Если оставить поле пустым, адрес будет создан из заголовка."
                }
                button { r#type: "submit", "Сохранить" }
            }
        },
    ))
}

pub fn delete(user: &UserInfo, note: &Note) -> String {
    let action = routes::delete(&note.slug);
    render(layout(
        Some(user),
        "Удалить заметку",
        rsx! {
            h1 { "Удалить заметку" }
            p { "Вы действительно хотите удалить заметку «{note.title}»?" }
            form { method: "post", action: "{action}",
                button { r#type: "submit", "Удалить" }
            }
            a { href: routes::detail(&note.slug), "Отмена" }
        },
    ))
}

pub fn success(user: &UserInfo) -> String {
    render(layout(
        Some(user),
        "Успешно",
        rsx! {
            h1 { "Успешно!" }
            p { "Изменения сохранены." }
            a { href: routes::LIST, "Вернуться к заметкам" }
        },
    ))
}
