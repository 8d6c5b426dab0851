use api::auth::{LoginForm, SignupForm, MIN_PASSWORD_LENGTH};
use api::FormErrors;
use dioxus::prelude::*;
use store::UserInfo;

use super::{errorlist, input_field, layout, render};
use crate::routes;

pub fn login(user: Option<&UserInfo>, form: &LoginForm, errors: &FormErrors) -> String {
    let next = form.next.as_deref().unwrap_or_default();
    render(layout(
        user,
        "Вход",
        rsx! {
            h1 { "Вход" }
            form { method: "post", action: routes::LOGIN, id: "login-form",
                {errorlist(errors.non_field())}
                {input_field("Имя пользователя", "username", "text", &form.username, errors.field("username"))}
                {input_field("Пароль", "password", "password", "", errors.field("password"))}
                input { r#type: "hidden", name: "next", value: "{next}" }
                button { r#type: "submit", "Войти" }
            }
            p {
                "Нет учётной записи? "
                a { href: routes::SIGNUP, "Зарегистрируйтесь" }
            }
        },
    ))
}

pub fn signup(user: Option<&UserInfo>, form: &SignupForm, errors: &FormErrors) -> String {
    let hint = format!("Пароль должен содержать как минимум {MIN_PASSWORD_LENGTH} символов.");
    render(layout(
        user,
        "Регистрация",
        rsx! {
            h1 { "Регистрация" }
            form { method: "post", action: routes::SIGNUP, id: "signup-form",
                {errorlist(errors.non_field())}
                {input_field("Имя пользователя", "username", "text", &form.username, errors.field("username"))}
                {input_field("Пароль", "password1", "password", "", errors.field("password1"))}
                p { class: "helptext", "{hint}" }
                {input_field("Подтверждение пароля", "password2", "password", "", errors.field("password2"))}
                button { r#type: "submit", "Зарегистрироваться" }
            }
        },
    ))
}

pub fn logged_out() -> String {
    render(layout(
        None,
        "Выход",
        rsx! {
            h1 { "Вы вышли из своей учётной записи" }
            a { href: routes::LOGIN, "Войти снова" }
        },
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_keeps_next() {
        let form = LoginForm {
            next: Some("/notes/".into()),
            ..LoginForm::default()
        };
        let html = login(None, &form, &FormErrors::new());
        assert!(html.contains("login-form"));
        assert!(html.contains("value=\"/notes/\""));
    }

    #[test]
    fn test_login_shows_non_field_errors() {
        let mut errors = FormErrors::new();
        errors.add(FormErrors::NON_FIELD, api::auth::INVALID_LOGIN);
        let html = login(None, &LoginForm::default(), &errors);
        assert!(html.contains("errorlist"));
    }

    #[test]
    fn test_logged_out_has_no_user_menu() {
        let html = logged_out();
        assert!(html.contains(routes::LOGIN));
        assert!(!html.contains(routes::LOGOUT));
    }
}
