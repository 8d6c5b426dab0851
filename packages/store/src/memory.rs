use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::Utc;

use crate::models::{Note, NoteDraft, User};
use crate::repo::{NoteStore, StoreError, UserStore};

#[derive(Debug, Default)]
struct Tables {
    notes: Vec<Note>,
    users: Vec<User>,
    next_note_id: i64,
    next_user_id: i64,
}

/// In-memory NoteStore and UserStore for testing and local runs.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    tables: Arc<Mutex<Tables>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Tables>, StoreError> {
        self.tables
            .lock()
            .map_err(|e| StoreError::Backend(e.to_string()))
    }
}

#[async_trait]
impl NoteStore for MemoryStore {
    async fn list_by_author(&self, author_id: i64) -> Result<Vec<Note>, StoreError> {
        // Notes are appended in id order, so a filter keeps insertion order.
        Ok(self
            .lock()?
            .notes
            .iter()
            .filter(|n| n.author_id == author_id)
            .cloned()
            .collect())
    }

    async fn get_by_slug(&self, slug: &str) -> Result<Option<Note>, StoreError> {
        Ok(self.lock()?.notes.iter().find(|n| n.slug == slug).cloned())
    }

    async fn slug_exists(&self, slug: &str, except_id: Option<i64>) -> Result<bool, StoreError> {
        Ok(self
            .lock()?
            .notes
            .iter()
            .any(|n| n.slug == slug && Some(n.id) != except_id))
    }

    async fn create(&self, author_id: i64, draft: NoteDraft) -> Result<Note, StoreError> {
        let mut tables = self.lock()?;
        if tables.notes.iter().any(|n| n.slug == draft.slug) {
            return Err(StoreError::SlugTaken(draft.slug));
        }
        tables.next_note_id += 1;
        let note = Note {
            id: tables.next_note_id,
            title: draft.title,
            text: draft.text,
            slug: draft.slug,
            author_id,
            created_at: Utc::now(),
        };
        tables.notes.push(note.clone());
        Ok(note)
    }

    async fn update(&self, id: i64, draft: NoteDraft) -> Result<Note, StoreError> {
        let mut tables = self.lock()?;
        if tables
            .notes
            .iter()
            .any(|n| n.slug == draft.slug && n.id != id)
        {
            return Err(StoreError::SlugTaken(draft.slug));
        }
        let note = tables
            .notes
            .iter_mut()
            .find(|n| n.id == id)
            .ok_or_else(|| StoreError::NotFound(format!("note {id}")))?;
        note.title = draft.title;
        note.text = draft.text;
        note.slug = draft.slug;
        Ok(note.clone())
    }

    async fn delete(&self, id: i64) -> Result<(), StoreError> {
        let mut tables = self.lock()?;
        let before = tables.notes.len();
        tables.notes.retain(|n| n.id != id);
        if tables.notes.len() == before {
            return Err(StoreError::NotFound(format!("note {id}")));
        }
        Ok(())
    }

    async fn count(&self) -> Result<i64, StoreError> {
        Ok(self.lock()?.notes.len() as i64)
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn create_user(&self, username: &str, password_hash: &str) -> Result<User, StoreError> {
        let mut tables = self.lock()?;
        if tables.users.iter().any(|u| u.username == username) {
            return Err(StoreError::UsernameTaken(username.to_string()));
        }
        tables.next_user_id += 1;
        let user = User {
            id: tables.next_user_id,
            username: username.to_string(),
            password_hash: password_hash.to_string(),
            created_at: Utc::now(),
        };
        tables.users.push(user.clone());
        Ok(user)
    }

    async fn get_user(&self, id: i64) -> Result<Option<User>, StoreError> {
        Ok(self.lock()?.users.iter().find(|u| u.id == id).cloned())
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, StoreError> {
        Ok(self
            .lock()?
            .users
            .iter()
            .find(|u| u.username == username)
            .cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(title: &str, slug: &str) -> NoteDraft {
        NoteDraft {
            title: title.to_string(),
            text: "Текст".to_string(),
            slug: slug.to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_and_list_by_author() {
        let store = MemoryStore::new();
        let author = store.create_user("author", "hash").await.unwrap();
        let reader = store.create_user("reader", "hash").await.unwrap();

        store.create(author.id, draft("First", "first")).await.unwrap();
        store.create(reader.id, draft("Other", "other")).await.unwrap();
        store.create(author.id, draft("Second", "second")).await.unwrap();

        let notes = store.list_by_author(author.id).await.unwrap();
        let slugs: Vec<_> = notes.iter().map(|n| n.slug.as_str()).collect();
        assert_eq!(slugs, ["first", "second"]);
        assert!(notes[0].id < notes[1].id);
        assert_eq!(store.count().await.unwrap(), 3);
    }

    #[tokio::test]
    async fn test_duplicate_slug_is_rejected() {
        let store = MemoryStore::new();
        store.create(1, draft("A", "same")).await.unwrap();

        let err = store.create(2, draft("B", "same")).await.unwrap_err();
        assert!(matches!(err, StoreError::SlugTaken(slug) if slug == "same"));
        assert_eq!(store.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_get_by_slug() {
        let store = MemoryStore::new();
        store.create(1, draft("A", "mine")).await.unwrap();

        let note = store.get_by_slug("mine").await.unwrap().unwrap();
        assert!(note.is_authored_by(1));
        assert!(!note.is_authored_by(2));
        assert!(store.get_by_slug("missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_slug_exists_ignores_edited_note() {
        let store = MemoryStore::new();
        let note = store.create(1, draft("A", "taken")).await.unwrap();

        assert!(store.slug_exists("taken", None).await.unwrap());
        assert!(!store.slug_exists("taken", Some(note.id)).await.unwrap());
        assert!(!store.slug_exists("free", None).await.unwrap());
    }

    #[tokio::test]
    async fn test_update_keeps_owner() {
        let store = MemoryStore::new();
        let note = store.create(7, draft("Old", "old")).await.unwrap();

        let updated = store.update(note.id, draft("New", "new")).await.unwrap();
        assert_eq!(updated.title, "New");
        assert_eq!(updated.slug, "new");
        assert_eq!(updated.author_id, 7);
        assert!(store.get_by_slug("old").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update_into_foreign_slug_fails() {
        let store = MemoryStore::new();
        store.create(1, draft("A", "a")).await.unwrap();
        let b = store.create(1, draft("B", "b")).await.unwrap();

        let err = store.update(b.id, draft("B", "a")).await.unwrap_err();
        assert!(matches!(err, StoreError::SlugTaken(_)));
        assert_eq!(store.get_by_slug("b").await.unwrap().unwrap().title, "B");
    }

    #[tokio::test]
    async fn test_delete() {
        let store = MemoryStore::new();
        let note = store.create(1, draft("A", "a")).await.unwrap();

        store.delete(note.id).await.unwrap();
        assert_eq!(store.count().await.unwrap(), 0);
        assert!(matches!(
            store.delete(note.id).await,
            Err(StoreError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_usernames_are_unique() {
        let store = MemoryStore::new();
        let user = store.create_user("Великий автор", "hash").await.unwrap();

        let err = store.create_user("Великий автор", "other").await.unwrap_err();
        assert!(matches!(err, StoreError::UsernameTaken(_)));

        let found = store.find_by_username("Великий автор").await.unwrap();
        assert_eq!(found.map(|u| u.id), Some(user.id));
        assert_eq!(store.get_user(user.id).await.unwrap().unwrap(), user);
        assert!(store.get_user(99).await.unwrap().is_none());
    }
}
