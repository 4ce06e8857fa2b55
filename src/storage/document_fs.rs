// SPDX-License-Identifier: AGPL-3.0-or-later

//! Filesystem-backed JSON document store.
//!
//! Each document is a single JSON file; writes go through a temp file and an
//! atomic rename, so concurrent requests never observe a partially written
//! document. That per-document atomicity is the only consistency guarantee
//! the store provides.

use std::fs::{self, File};
use std::io::{self, BufReader, Write};
use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};
use tempfile::NamedTempFile;
use thiserror::Error;

use super::StorePaths;

/// Error type for document store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// I/O error during file operations
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    /// Document not found
    #[error("not found: {0}")]
    NotFound(String),
    /// Document id is not a plain path component
    #[error("invalid document id: {0}")]
    InvalidId(String),
    /// Document already exists
    #[error("already exists: {0}")]
    AlreadyExists(String),
    /// Store not initialized
    #[error("store not initialized")]
    NotInitialized,
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Document store over a plain directory tree.
///
/// All operations use standard filesystem I/O against the layout described
/// in [`StorePaths`].
#[derive(Debug, Clone)]
pub struct DocumentStore {
    paths: StorePaths,
    initialized: bool,
}

impl DocumentStore {
    /// Create a new DocumentStore instance.
    ///
    /// Does NOT create the directory structure. Call `initialize()` first.
    pub fn new(paths: StorePaths) -> Self {
        Self {
            paths,
            initialized: false,
        }
    }

    /// Get the store paths.
    pub fn paths(&self) -> &StorePaths {
        &self.paths
    }

    /// Initialize the collection directory structure.
    ///
    /// Safe to call multiple times (idempotent).
    pub fn initialize(&mut self) -> StoreResult<()> {
        let dirs = [
            self.paths.users_dir(),
            self.paths.properties_dir(),
            self.paths.reviews_dir(),
            self.paths.wishlist_dir(),
            self.paths.sell_requests_dir(),
        ];

        for dir in dirs {
            fs::create_dir_all(&dir)?;
        }

        self.initialized = true;
        Ok(())
    }

    /// Check that the store is reachable and writable.
    ///
    /// Performs a write-read-delete probe under the store root.
    pub fn health_check(&self) -> StoreResult<()> {
        if !self.initialized {
            return Err(StoreError::NotInitialized);
        }

        let probe = self.paths.root().join(".health_check");
        let data = b"health_check_data";

        fs::write(&probe, data)?;
        let read_back = fs::read(&probe)?;
        fs::remove_file(&probe)?;

        if read_back != data {
            return Err(StoreError::Io(io::Error::other("health probe mismatch")));
        }

        Ok(())
    }

    // ========== Generic JSON Operations ==========

    /// Read a JSON document and deserialize it.
    pub fn read_json<T: DeserializeOwned>(&self, path: impl AsRef<Path>) -> StoreResult<T> {
        if !self.initialized {
            return Err(StoreError::NotInitialized);
        }

        let file = File::open(path.as_ref())?;
        let reader = BufReader::new(file);
        let value = serde_json::from_reader(reader)?;
        Ok(value)
    }

    /// Write a JSON document (atomic write via rename).
    pub fn write_json<T: Serialize>(&self, path: impl AsRef<Path>, value: &T) -> StoreResult<()> {
        if !self.initialized {
            return Err(StoreError::NotInitialized);
        }

        let path = path.as_ref();
        let parent = path
            .parent()
            .ok_or_else(|| StoreError::Io(io::Error::other("document path has no parent")))?;
        fs::create_dir_all(parent)?;

        // Write to a uniquely named temp file first, then rename. Concurrent
        // writers to the same document each get their own temp file, so the
        // last rename wins with an intact document.
        let mut temp = NamedTempFile::new_in(parent)?;
        serde_json::to_writer_pretty(&mut temp, value)?;
        temp.flush()?;
        temp.persist(path).map_err(|e| StoreError::Io(e.error))?;
        Ok(())
    }

    /// Check if a document exists.
    pub fn exists(&self, path: impl AsRef<Path>) -> bool {
        path.as_ref().is_file()
    }

    /// Delete a document.
    pub fn delete(&self, path: impl AsRef<Path>) -> StoreResult<()> {
        if !self.initialized {
            return Err(StoreError::NotInitialized);
        }
        fs::remove_file(path.as_ref())?;
        Ok(())
    }

    /// List the document IDs in a collection directory.
    pub fn list_ids(&self, dir: impl AsRef<Path>) -> StoreResult<Vec<String>> {
        if !self.initialized {
            return Err(StoreError::NotInitialized);
        }

        let dir = dir.as_ref();
        if !dir.exists() {
            return Ok(Vec::new());
        }

        let mut ids = Vec::new();
        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            let path = entry.path();
            if path.is_file() && path.extension().is_some_and(|ext| ext == "json") {
                if let Some(id) = path.file_stem().and_then(|stem| stem.to_str()) {
                    ids.push(id.to_string());
                }
            }
        }
        Ok(ids)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};
    use tempfile::TempDir;

    fn test_store() -> (DocumentStore, TempDir) {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let paths = StorePaths::new(temp_dir.path());
        let mut store = DocumentStore::new(paths);
        store.initialize().expect("Failed to initialize test store");
        (store, temp_dir)
    }

    #[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
    struct TestDoc {
        id: String,
        value: i32,
    }

    #[test]
    fn initialize_creates_collection_directories() {
        let (store, _guard) = test_store();

        assert!(store.paths().users_dir().exists());
        assert!(store.paths().properties_dir().exists());
        assert!(store.paths().reviews_dir().exists());
        assert!(store.paths().wishlist_dir().exists());
        assert!(store.paths().sell_requests_dir().exists());
    }

    #[test]
    fn write_and_read_json() {
        let (store, _guard) = test_store();
        let doc = TestDoc {
            id: "test-1".to_string(),
            value: 42,
        };

        let path = store.paths().properties_dir().join("test.json");
        store.write_json(&path, &doc).unwrap();

        let read: TestDoc = store.read_json(&path).unwrap();
        assert_eq!(read, doc);
    }

    #[test]
    fn health_check_works() {
        let (store, _guard) = test_store();
        store.health_check().expect("health check should pass");
    }

    #[test]
    fn list_ids_returns_json_stems_only() {
        let (store, _guard) = test_store();

        for i in 1..=3 {
            let path = store.paths().reviews_dir().join(format!("rev-{i}.json"));
            store
                .write_json(
                    &path,
                    &TestDoc {
                        id: format!("rev-{i}"),
                        value: i,
                    },
                )
                .unwrap();
        }
        // A stray non-JSON file must not show up.
        fs::write(store.paths().reviews_dir().join("notes.txt"), b"x").unwrap();

        let mut ids = store.list_ids(store.paths().reviews_dir()).unwrap();
        ids.sort();
        assert_eq!(ids, vec!["rev-1", "rev-2", "rev-3"]);
    }

    #[test]
    fn concurrent_writes_leave_document_intact() {
        let (store, _guard) = test_store();
        let path = store.paths().users_dir().join("contended.json");

        let writers: Vec<_> = (0..2)
            .map(|n| {
                let store = store.clone();
                let path = path.clone();
                std::thread::spawn(move || {
                    for i in 0..50 {
                        store
                            .write_json(
                                &path,
                                &TestDoc {
                                    id: format!("writer-{n}"),
                                    value: i,
                                },
                            )
                            .unwrap();
                    }
                })
            })
            .collect();
        for writer in writers {
            writer.join().unwrap();
        }

        // Whichever rename won last, the document must parse cleanly.
        let doc: TestDoc = store.read_json(&path).unwrap();
        assert!(doc.id.starts_with("writer-"));
    }

    #[test]
    fn delete_removes_document() {
        let (store, _guard) = test_store();

        let path = store.paths().users_dir().join("to-delete.json");
        store
            .write_json(
                &path,
                &TestDoc {
                    id: "del".to_string(),
                    value: 0,
                },
            )
            .unwrap();

        assert!(store.exists(&path));
        store.delete(&path).unwrap();
        assert!(!store.exists(&path));
    }

    #[test]
    fn uninitialized_store_returns_error() {
        let paths = StorePaths::new("/tmp/never-init");
        let store = DocumentStore::new(paths);

        let result = store.read_json::<TestDoc>("/tmp/any.json");
        assert!(matches!(result, Err(StoreError::NotInitialized)));
    }
}
