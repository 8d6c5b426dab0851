//! # Local accounts — signup and login
//!
//! - [`SignupForm`] / [`register`] — validates `{username, password1, password2}`,
//!   hashes the password with Argon2id and stores the account. The username must
//!   be unique; a clash is reported on the `username` field.
//! - [`LoginForm`] / [`authenticate`] — looks the user up by username and verifies
//!   the password hash. Unknown users and wrong passwords produce the same
//!   non-field error.

use serde::{Deserialize, Serialize};
use store::models::USERNAME_MAX_LENGTH;
use store::{StoreError, User, UserStore};

use super::password::{hash_password, verify_password};
use crate::error::Error;
use crate::forms::{too_long, FormError, FormErrors, REQUIRED};

pub const MIN_PASSWORD_LENGTH: usize = 8;

pub const INVALID_USERNAME: &str =
    "Введите правильное имя пользователя. Оно может содержать только буквы, цифры и знаки @/./+/-/_.";

pub const USERNAME_TAKEN: &str = "Пользователь с таким именем уже существует.";

pub const PASSWORD_MISMATCH: &str = "Введенные пароли не совпадают.";

pub const INVALID_LOGIN: &str = "Пожалуйста, введите правильные имя пользователя и пароль. Оба поля могут быть чувствительны к регистру.";

pub fn password_too_short() -> String {
    format!(
        "Введённый пароль слишком короткий. Он должен содержать как минимум {MIN_PASSWORD_LENGTH} символов."
    )
}

fn is_valid_username(username: &str) -> bool {
    username
        .chars()
        .all(|c| c.is_alphanumeric() || matches!(c, '@' | '.' | '+' | '-' | '_' | ' '))
}

/// Signup payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SignupForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password1: String,
    #[serde(default)]
    pub password2: String,
}

impl SignupForm {
    /// Validate the payload, returning the trimmed username.
    pub async fn clean(&self, users: &dyn UserStore) -> Result<String, FormError> {
        let mut errors = FormErrors::new();

        let username = self.username.trim();
        if username.is_empty() {
            errors.add("username", REQUIRED);
        } else if username.chars().count() > USERNAME_MAX_LENGTH {
            errors.add(
                "username",
                too_long(USERNAME_MAX_LENGTH, username.chars().count()),
            );
        } else if !is_valid_username(username) {
            errors.add("username", INVALID_USERNAME);
        } else if users
            .find_by_username(username)
            .await
            .map_err(Error::from)?
            .is_some()
        {
            errors.add("username", USERNAME_TAKEN);
        }

        if self.password1.is_empty() {
            errors.add("password1", REQUIRED);
        }
        if self.password2.is_empty() {
            errors.add("password2", REQUIRED);
        } else if self.password1 != self.password2 {
            errors.add("password2", PASSWORD_MISMATCH);
        } else if self.password2.chars().count() < MIN_PASSWORD_LENGTH {
            errors.add("password2", password_too_short());
        }

        errors.finish(username.to_string())
    }
}

/// Validate a signup and create the account.
pub async fn register(users: &dyn UserStore, form: &SignupForm) -> Result<User, FormError> {
    let username = form.clean(users).await?;
    let password_hash = hash_password(&form.password1)?;

    match users.create_user(&username, &password_hash).await {
        Ok(user) => {
            tracing::info!(user_id = user.id, "registered user");
            Ok(user)
        }
        Err(StoreError::UsernameTaken(_)) => {
            let mut errors = FormErrors::new();
            errors.add("username", USERNAME_TAKEN);
            Err(FormError::Invalid(errors))
        }
        Err(e) => Err(Error::from(e).into()),
    }
}

/// Login payload. `next` is the page to return to after logging in.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub next: Option<String>,
}

/// Check credentials and return the matching user.
pub async fn authenticate(users: &dyn UserStore, form: &LoginForm) -> Result<User, FormError> {
    let mut errors = FormErrors::new();
    let username = form.username.trim();
    if username.is_empty() {
        errors.add("username", REQUIRED);
    }
    if form.password.is_empty() {
        errors.add("password", REQUIRED);
    }
    if !errors.is_empty() {
        return Err(FormError::Invalid(errors));
    }

    let user = users
        .find_by_username(username)
        .await
        .map_err(Error::from)?;

    if let Some(user) = user {
        if verify_password(&form.password, &user.password_hash)? {
            return Ok(user);
        }
    }

    tracing::debug!(username, "rejected login");
    errors.add(FormErrors::NON_FIELD, INVALID_LOGIN);
    Err(FormError::Invalid(errors))
}
