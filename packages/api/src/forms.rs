//! # Form validation for notes
//!
//! [`NoteForm`] is the raw `{title, text, slug?}` payload posted by the add and
//! edit pages. [`NoteForm::clean`] turns it into a [`NoteDraft`] or a set of
//! per-field [`FormErrors`]:
//!
//! - `title` and `text` are required, surrounding whitespace is stripped;
//! - a blank `slug` is derived from the title with [`store::slugify`] and cut to
//!   [`SLUG_MAX_LENGTH`] characters;
//! - a slug used by any other note is rejected with `"<slug>"` + [`WARNING`].
//!
//! A slug clash detected by the store itself (two requests racing for the same
//! slug) is folded into the same field error by `From<StoreError>`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use store::models::{SLUG_MAX_LENGTH, TITLE_MAX_LENGTH};
use store::slug::{is_valid_slug, truncate_chars};
use store::{slugify, Note, NoteDraft, NoteStore, StoreError};
use thiserror::Error;

use crate::error::Error;

/// Suffix appended to a duplicate slug in its field error.
pub const WARNING: &str = " - такой slug уже существует, придумайте уникальное значение!";

pub const REQUIRED: &str = "Обязательное поле.";

pub const INVALID_SLUG: &str =
    "Значение должно состоять только из латинских букв, цифр, знаков подчеркивания или дефиса.";

pub const EMPTY_DERIVED_SLUG: &str =
    "Не удалось сформировать slug из заголовка, укажите его вручную.";

/// Error message for a value longer than `max` characters.
pub fn too_long(max: usize, actual: usize) -> String {
    format!("Убедитесь, что это значение содержит не более {max} символов (сейчас {actual}).")
}

/// Field name to error messages. Errors not tied to a field live under
/// [`FormErrors::NON_FIELD`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormErrors {
    fields: BTreeMap<String, Vec<String>>,
}

impl FormErrors {
    pub const NON_FIELD: &'static str = "__all__";

    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.fields
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    pub fn field(&self, field: &str) -> &[String] {
        self.fields.get(field).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn non_field(&self) -> &[String] {
        self.field(Self::NON_FIELD)
    }

    pub fn has(&self, field: &str) -> bool {
        !self.field(field).is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// `Ok(value)` when no error was recorded.
    pub fn finish<T>(self, value: T) -> Result<T, FormError> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(FormError::Invalid(self))
        }
    }
}

/// Outcome of a failed form submission.
#[derive(Debug, Error)]
pub enum FormError {
    /// The submission is invalid; re-render the form with these errors.
    #[error("form is invalid")]
    Invalid(FormErrors),

    #[error(transparent)]
    Api(#[from] Error),
}

impl FormError {
    fn field(field: &str, message: impl Into<String>) -> Self {
        let mut errors = FormErrors::new();
        errors.add(field, message);
        Self::Invalid(errors)
    }
}

impl From<StoreError> for FormError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::SlugTaken(slug) => Self::field("slug", format!("{slug}{WARNING}")),
            other => Self::Api(Error::Store(other)),
        }
    }
}

/// Raw add/edit payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NoteForm {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub slug: Option<String>,
}

impl NoteForm {
    /// Prefill the edit page with a stored note.
    pub fn from_note(note: &Note) -> Self {
        Self {
            title: note.title.clone(),
            text: note.text.clone(),
            slug: Some(note.slug.clone()),
        }
    }

    /// Validate the payload. `instance` is the id of the note being edited,
    /// whose own slug does not count as a collision.
    pub async fn clean(
        &self,
        notes: &dyn NoteStore,
        instance: Option<i64>,
    ) -> Result<NoteDraft, FormError> {
        let mut errors = FormErrors::new();

        let title = self.title.trim();
        if title.is_empty() {
            errors.add("title", REQUIRED);
        } else if title.chars().count() > TITLE_MAX_LENGTH {
            errors.add("title", too_long(TITLE_MAX_LENGTH, title.chars().count()));
        }

        let text = self.text.trim();
        if text.is_empty() {
            errors.add("text", REQUIRED);
        }

        let supplied = self
            .slug
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty());

        let slug = match supplied {
            Some(slug) if slug.chars().count() > SLUG_MAX_LENGTH => {
                errors.add("slug", too_long(SLUG_MAX_LENGTH, slug.chars().count()));
                None
            }
            Some(slug) if !is_valid_slug(slug) => {
                errors.add("slug", INVALID_SLUG);
                None
            }
            Some(slug) => Some(slug.to_string()),
            None if errors.has("title") => None,
            None => {
                let derived = truncate_chars(&slugify(title), SLUG_MAX_LENGTH);
                if derived.is_empty() {
                    errors.add("slug", EMPTY_DERIVED_SLUG);
                    None
                } else {
                    Some(derived)
                }
            }
        };

        if let Some(ref slug) = slug {
            if notes.slug_exists(slug, instance).await? {
                errors.add("slug", format!("{slug}{WARNING}"));
            }
        }

        let draft = NoteDraft {
            title: title.to_string(),
            text: text.to_string(),
            slug: slug.unwrap_or_default(),
        };
        errors.finish(draft)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::MemoryStore;

    fn form(title: &str, text: &str, slug: Option<&str>) -> NoteForm {
        NoteForm {
            title: title.to_string(),
            text: text.to_string(),
            slug: slug.map(str::to_string),
        }
    }

    fn invalid(result: Result<NoteDraft, FormError>) -> FormErrors {
        match result {
            Err(FormError::Invalid(errors)) => errors,
            other => panic!("expected invalid form, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_supplied_slug_is_kept() {
        let store = MemoryStore::new();
        let draft = form("Новый заголовок", "Новый текст", Some("New_slug"))
            .clean(&store, None)
            .await
            .unwrap();
        assert_eq!(draft.slug, "New_slug");
        assert_eq!(draft.title, "Новый заголовок");
        assert_eq!(draft.text, "Новый текст");
    }

    #[tokio::test]
    async fn test_blank_slug_is_derived_from_title() {
        let store = MemoryStore::new();
        for slug in [None, Some(""), Some("   ")] {
            let draft = form("Новый заголовок", "Текст", slug)
                .clean(&store, None)
                .await
                .unwrap();
            assert_eq!(draft.slug, slugify("Новый заголовок"));
        }
    }

    #[tokio::test]
    async fn test_derived_slug_is_truncated() {
        let store = MemoryStore::new();
        let title = "а".repeat(TITLE_MAX_LENGTH);
        let draft = form(&title, "Текст", None).clean(&store, None).await.unwrap();
        assert_eq!(draft.slug.len(), SLUG_MAX_LENGTH);
    }

    #[tokio::test]
    async fn test_duplicate_slug() {
        let store = MemoryStore::new();
        let existing = store
            .create(
                1,
                NoteDraft {
                    title: "Заголовок".into(),
                    text: "Текст".into(),
                    slug: "some_slug".into(),
                },
            )
            .await
            .unwrap();

        let errors = invalid(
            form("Другой", "Текст", Some("some_slug"))
                .clean(&store, None)
                .await,
        );
        assert_eq!(errors.field("slug"), [format!("some_slug{WARNING}")]);

        // Editing the note that owns the slug is not a collision.
        let draft = form("Другой", "Текст", Some("some_slug"))
            .clean(&store, Some(existing.id))
            .await
            .unwrap();
        assert_eq!(draft.slug, "some_slug");
    }

    #[tokio::test]
    async fn test_derived_slug_collision() {
        let store = MemoryStore::new();
        store
            .create(
                1,
                NoteDraft {
                    title: "Заголовок".into(),
                    text: "Текст".into(),
                    slug: "zagolovok".into(),
                },
            )
            .await
            .unwrap();

        let errors = invalid(form("Заголовок", "Текст", None).clean(&store, None).await);
        assert_eq!(errors.field("slug"), [format!("zagolovok{WARNING}")]);
    }

    #[tokio::test]
    async fn test_required_fields() {
        let store = MemoryStore::new();
        let errors = invalid(form("  ", "", None).clean(&store, None).await);
        assert_eq!(errors.field("title"), [REQUIRED]);
        assert_eq!(errors.field("text"), [REQUIRED]);
        assert!(!errors.has("slug"));
    }

    #[tokio::test]
    async fn test_invalid_slug_characters() {
        let store = MemoryStore::new();
        let errors = invalid(
            form("Заголовок", "Текст", Some("не slug"))
                .clean(&store, None)
                .await,
        );
        assert_eq!(errors.field("slug"), [INVALID_SLUG]);
    }

    #[tokio::test]
    async fn test_too_long_values() {
        let store = MemoryStore::new();
        let long = "x".repeat(101);
        let errors = invalid(form(&long, "Текст", Some(long.as_str())).clean(&store, None).await);
        assert_eq!(errors.field("title"), [too_long(100, 101)]);
        assert_eq!(errors.field("slug"), [too_long(100, 101)]);
    }

    #[tokio::test]
    async fn test_title_without_transliterable_characters() {
        let store = MemoryStore::new();
        let errors = invalid(form("!!!", "Текст", None).clean(&store, None).await);
        assert_eq!(errors.field("slug"), [EMPTY_DERIVED_SLUG]);
    }

    #[test]
    fn test_store_slug_clash_becomes_field_error() {
        let err: FormError = StoreError::SlugTaken("taken".into()).into();
        let errors = invalid(Err(err));
        assert_eq!(errors.field("slug"), [format!("taken{WARNING}")]);

        let err: FormError = StoreError::Backend("down".into()).into();
        assert!(matches!(err, FormError::Api(Error::Store(_))));
    }
}
