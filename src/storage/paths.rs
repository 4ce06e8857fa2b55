// SPDX-License-Identifier: AGPL-3.0-or-later

//! Path constants and utilities for the document store layout.

use std::path::{Path, PathBuf};

use super::{StoreError, StoreResult};

/// Default root directory for persistent storage.
pub const DATA_ROOT: &str = "/data";

/// Require a document id to be one plain path component.
///
/// Ids arrive percent-decoded from URL path segments, so a raw join would
/// let `..%2F` escape the collection directory. Anything containing a
/// separator or `..` is rejected before a path is ever built.
fn checked(id: &str) -> StoreResult<&str> {
    if id.is_empty() || id.contains(['/', '\\']) || id.contains("..") {
        return Err(StoreError::InvalidId(id.to_string()));
    }
    Ok(id)
}

/// Storage path utilities for the document store.
///
/// One directory per collection, one JSON file per document:
///
/// ```text
/// /data/
///   users/{user_id}.json
///   properties/{property_id}.json
///   reviews/{review_id}.json
///   wishlist/{entry_id}.json
///   sell_requests/{request_id}.json
/// ```
#[derive(Debug, Clone)]
pub struct StorePaths {
    root: PathBuf,
}

impl Default for StorePaths {
    fn default() -> Self {
        Self::new(DATA_ROOT)
    }
}

impl StorePaths {
    /// Create a new StorePaths with a custom root (useful for testing).
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Root directory for all persistent data.
    pub fn root(&self) -> &Path {
        &self.root
    }

    // ========== User Paths ==========

    /// Directory containing all user documents.
    pub fn users_dir(&self) -> PathBuf {
        self.root.join("users")
    }

    /// Path to a specific user document.
    pub fn user(&self, user_id: &str) -> StoreResult<PathBuf> {
        Ok(self.users_dir().join(format!("{}.json", checked(user_id)?)))
    }

    // ========== Property Paths ==========

    /// Directory containing all property documents.
    pub fn properties_dir(&self) -> PathBuf {
        self.root.join("properties")
    }

    /// Path to a specific property document.
    pub fn property(&self, property_id: &str) -> StoreResult<PathBuf> {
        Ok(self
            .properties_dir()
            .join(format!("{}.json", checked(property_id)?)))
    }

    // ========== Review Paths ==========

    /// Directory containing all review documents.
    pub fn reviews_dir(&self) -> PathBuf {
        self.root.join("reviews")
    }

    /// Path to a specific review document.
    pub fn review(&self, review_id: &str) -> StoreResult<PathBuf> {
        Ok(self
            .reviews_dir()
            .join(format!("{}.json", checked(review_id)?)))
    }

    // ========== Wishlist Paths ==========

    /// Directory containing all wishlist entries.
    pub fn wishlist_dir(&self) -> PathBuf {
        self.root.join("wishlist")
    }

    /// Path to a specific wishlist entry.
    pub fn wishlist_entry(&self, entry_id: &str) -> StoreResult<PathBuf> {
        Ok(self
            .wishlist_dir()
            .join(format!("{}.json", checked(entry_id)?)))
    }

    // ========== Sell Request Paths ==========

    /// Directory containing all sell requests.
    pub fn sell_requests_dir(&self) -> PathBuf {
        self.root.join("sell_requests")
    }

    /// Path to a specific sell request.
    pub fn sell_request(&self, request_id: &str) -> StoreResult<PathBuf> {
        Ok(self
            .sell_requests_dir()
            .join(format!("{}.json", checked(request_id)?)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_paths_use_data_root() {
        let paths = StorePaths::default();
        assert_eq!(paths.root(), Path::new("/data"));
    }

    #[test]
    fn custom_root_for_testing() {
        let paths = StorePaths::new("/tmp/test-data");
        assert_eq!(paths.root(), Path::new("/tmp/test-data"));
        assert_eq!(
            paths.user("u-123").unwrap(),
            PathBuf::from("/tmp/test-data/users/u-123.json")
        );
    }

    #[test]
    fn collection_paths_are_correct() {
        let paths = StorePaths::default();
        assert_eq!(paths.users_dir(), PathBuf::from("/data/users"));
        assert_eq!(
            paths.property("p-1").unwrap(),
            PathBuf::from("/data/properties/p-1.json")
        );
        assert_eq!(
            paths.review("r-1").unwrap(),
            PathBuf::from("/data/reviews/r-1.json")
        );
        assert_eq!(
            paths.wishlist_entry("w-1").unwrap(),
            PathBuf::from("/data/wishlist/w-1.json")
        );
        assert_eq!(
            paths.sell_request("s-1").unwrap(),
            PathBuf::from("/data/sell_requests/s-1.json")
        );
    }

    #[test]
    fn ids_with_separators_or_dotdot_are_rejected() {
        let paths = StorePaths::default();
        for id in ["../users/u-1", "..\\users\\u-1", "a/b", "..", ""] {
            assert!(
                matches!(paths.review(id), Err(StoreError::InvalidId(_))),
                "id {id:?} must be rejected"
            );
        }
    }
}
