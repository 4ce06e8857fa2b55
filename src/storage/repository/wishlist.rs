// SPDX-License-Identifier: AGPL-3.0-or-later

//! Wishlist repository.

use chrono::Utc;
use uuid::Uuid;

use crate::models::{CreateWishlistRequest, WishlistEntry};

use super::super::{DocumentStore, StoreError, StoreResult};

/// Repository for wishlist entries.
pub struct WishlistRepository<'a> {
    store: &'a DocumentStore,
}

impl<'a> WishlistRepository<'a> {
    /// Create a new WishlistRepository.
    pub fn new(store: &'a DocumentStore) -> Self {
        Self { store }
    }

    /// Get a wishlist entry by ID.
    pub fn get(&self, entry_id: &str) -> StoreResult<WishlistEntry> {
        let path = self.store.paths().wishlist_entry(entry_id)?;
        if !self.store.exists(&path) {
            return Err(StoreError::NotFound(format!("Wishlist entry {entry_id}")));
        }
        self.store.read_json(path)
    }

    /// Add a property to a user's wishlist.
    pub fn create(&self, request: CreateWishlistRequest) -> StoreResult<WishlistEntry> {
        let entry = WishlistEntry {
            id: Uuid::new_v4().to_string(),
            user_email: request.user_email,
            property_id: request.property_id,
            added_at: Utc::now(),
        };

        self.store
            .write_json(self.store.paths().wishlist_entry(&entry.id)?, &entry)?;
        Ok(entry)
    }

    /// List the wishlist entries of a user.
    pub fn list_by_user(&self, email: &str) -> StoreResult<Vec<WishlistEntry>> {
        let ids = self.store.list_ids(self.store.paths().wishlist_dir())?;

        let mut entries = Vec::new();
        for id in ids {
            if let Ok(entry) = self.get(&id) {
                if entry.user_email == email {
                    entries.push(entry);
                }
            }
        }
        Ok(entries)
    }

    /// Remove a wishlist entry.
    pub fn delete(&self, entry_id: &str) -> StoreResult<()> {
        let path = self.store.paths().wishlist_entry(entry_id)?;
        if !self.store.exists(&path) {
            return Err(StoreError::NotFound(format!("Wishlist entry {entry_id}")));
        }
        self.store.delete(path)
    }
}
