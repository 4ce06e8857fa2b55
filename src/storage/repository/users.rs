// SPDX-License-Identifier: AGPL-3.0-or-later

//! User repository.
//!
//! Users are keyed by a UUID on disk but looked up by email everywhere the
//! auth chain is involved; email is the unique key. Role checks always read
//! the stored document, never a cached copy.

use chrono::Utc;
use uuid::Uuid;

use crate::models::{Role, User};

use super::super::{DocumentStore, StoreError, StoreResult};

/// Repository for user documents.
pub struct UserRepository<'a> {
    store: &'a DocumentStore,
}

impl<'a> UserRepository<'a> {
    /// Create a new UserRepository.
    pub fn new(store: &'a DocumentStore) -> Self {
        Self { store }
    }

    /// Get a user by ID.
    pub fn get(&self, user_id: &str) -> StoreResult<User> {
        let path = self.store.paths().user(user_id)?;
        if !self.store.exists(&path) {
            return Err(StoreError::NotFound(format!("User {user_id}")));
        }
        self.store.read_json(path)
    }

    /// Find a user by email. Returns `Ok(None)` when no user matches.
    pub fn find_by_email(&self, email: &str) -> StoreResult<Option<User>> {
        let ids = self.store.list_ids(self.store.paths().users_dir())?;

        for id in ids {
            if let Ok(user) = self.get(&id) {
                if user.email == email {
                    return Ok(Some(user));
                }
            }
        }
        Ok(None)
    }

    /// Insert a user if no account with the same email exists.
    ///
    /// Returns `Ok(Some(user))` on insert and `Ok(None)` when the email is
    /// already taken (the idempotent first-sign-in path).
    pub fn insert_if_absent(&self, email: &str, name: Option<String>) -> StoreResult<Option<User>> {
        if self.find_by_email(email)?.is_some() {
            return Ok(None);
        }

        let user = User {
            id: Uuid::new_v4().to_string(),
            email: email.to_string(),
            name,
            role: Role::default(),
            last_logged_at: Utc::now(),
        };

        self.store
            .write_json(self.store.paths().user(&user.id)?, &user)?;
        Ok(Some(user))
    }

    /// List all users.
    pub fn list_all(&self) -> StoreResult<Vec<User>> {
        let ids = self.store.list_ids(self.store.paths().users_dir())?;

        let mut users = Vec::new();
        for id in ids {
            if let Ok(user) = self.get(&id) {
                users.push(user);
            }
        }
        Ok(users)
    }

    /// Set the role of a user.
    pub fn set_role(&self, user_id: &str, role: Role) -> StoreResult<User> {
        let mut user = self.get(user_id)?;
        user.role = role;
        self.store
            .write_json(self.store.paths().user(user_id)?, &user)?;
        Ok(user)
    }

    /// Update the last sign-in time for the user with the given email.
    pub fn touch_login(
        &self,
        email: &str,
        at: chrono::DateTime<Utc>,
    ) -> StoreResult<User> {
        let mut user = self
            .find_by_email(email)?
            .ok_or_else(|| StoreError::NotFound(format!("User {email}")))?;
        user.last_logged_at = at;
        self.store
            .write_json(self.store.paths().user(&user.id)?, &user)?;
        Ok(user)
    }

    /// Delete a user.
    pub fn delete(&self, user_id: &str) -> StoreResult<()> {
        let path = self.store.paths().user(user_id)?;
        if !self.store.exists(&path) {
            return Err(StoreError::NotFound(format!("User {user_id}")));
        }
        self.store.delete(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::StorePaths;
    use tempfile::TempDir;

    fn test_store() -> (DocumentStore, TempDir) {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let mut store = DocumentStore::new(StorePaths::new(temp_dir.path()));
        store.initialize().expect("Failed to initialize");
        (store, temp_dir)
    }

    #[test]
    fn insert_and_find_by_email() {
        let (store, _guard) = test_store();
        let repo = UserRepository::new(&store);

        let user = repo
            .insert_if_absent("a@x.com", Some("Alice".into()))
            .unwrap()
            .expect("first insert succeeds");
        assert_eq!(user.role, Role::User);

        let found = repo.find_by_email("a@x.com").unwrap().unwrap();
        assert_eq!(found.id, user.id);
        assert!(repo.find_by_email("b@x.com").unwrap().is_none());
    }

    #[test]
    fn insert_is_idempotent_per_email() {
        let (store, _guard) = test_store();
        let repo = UserRepository::new(&store);

        repo.insert_if_absent("a@x.com", None).unwrap().unwrap();
        let second = repo.insert_if_absent("a@x.com", None).unwrap();
        assert!(second.is_none());
        assert_eq!(repo.list_all().unwrap().len(), 1);
    }

    #[test]
    fn set_role_persists() {
        let (store, _guard) = test_store();
        let repo = UserRepository::new(&store);

        let user = repo.insert_if_absent("a@x.com", None).unwrap().unwrap();
        repo.set_role(&user.id, Role::Admin).unwrap();

        let reloaded = repo.get(&user.id).unwrap();
        assert_eq!(reloaded.role, Role::Admin);
    }

    #[test]
    fn touch_login_updates_timestamp() {
        let (store, _guard) = test_store();
        let repo = UserRepository::new(&store);

        let user = repo.insert_if_absent("a@x.com", None).unwrap().unwrap();
        let later = user.last_logged_at + chrono::Duration::hours(2);
        repo.touch_login("a@x.com", later).unwrap();

        let reloaded = repo.get(&user.id).unwrap();
        assert_eq!(reloaded.last_logged_at, later);
    }

    #[test]
    fn touch_login_unknown_email_errors() {
        let (store, _guard) = test_store();
        let repo = UserRepository::new(&store);

        let err = repo.touch_login("ghost@x.com", Utc::now()).unwrap_err();
        assert!(matches!(err, StoreError::NotFound(_)));
    }

    #[test]
    fn delete_removes_user() {
        let (store, _guard) = test_store();
        let repo = UserRepository::new(&store);

        let user = repo.insert_if_absent("a@x.com", None).unwrap().unwrap();
        repo.delete(&user.id).unwrap();
        assert!(matches!(repo.get(&user.id), Err(StoreError::NotFound(_))));

        let err = repo.delete(&user.id).unwrap_err();
        assert!(matches!(err, StoreError::NotFound(_)));
    }
}
