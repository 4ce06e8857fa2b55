// SPDX-License-Identifier: AGPL-3.0-or-later

use std::sync::Arc;

use crate::config::DEFAULT_TOKEN_TTL_SECS;
use crate::storage::DocumentStore;

/// Token signing configuration shared across requests.
#[derive(Clone)]
pub struct AuthConfig {
    /// HS256 shared signing secret.
    pub secret: String,
    /// Token lifetime in seconds.
    pub token_ttl_secs: i64,
}

impl AuthConfig {
    pub fn new(secret: impl Into<String>, token_ttl_secs: i64) -> Self {
        Self {
            secret: secret.into(),
            token_ttl_secs,
        }
    }
}

/// Shared application state: the owned store handle and auth configuration.
///
/// The store handle is the only long-lived resource shared between requests;
/// handlers borrow repositories from it per call.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<DocumentStore>,
    pub auth: AuthConfig,
}

impl AppState {
    pub fn new(store: DocumentStore, auth: AuthConfig) -> Self {
        Self {
            store: Arc::new(store),
            auth,
        }
    }
}

#[cfg(test)]
impl AppState {
    /// Test state over a fresh temp-dir store.
    ///
    /// Returns the TempDir guard alongside; drop it to clean up.
    pub fn for_tests() -> (Self, tempfile::TempDir) {
        let temp_dir = tempfile::TempDir::new().expect("Failed to create temp dir");
        let mut store = DocumentStore::new(crate::storage::StorePaths::new(temp_dir.path()));
        store.initialize().expect("Failed to initialize store");
        (
            Self::new(store, AuthConfig::new("test-secret", DEFAULT_TOKEN_TTL_SECS)),
            temp_dir,
        )
    }
}
