// SPDX-License-Identifier: AGPL-3.0-or-later

//! # Document Store Module
//!
//! Persistent storage as one JSON file per document, grouped into one
//! directory per collection under `DATA_DIR`.
//!
//! ## Storage Layout
//!
//! ```text
//! /data/
//!   users/{user_id}.json
//!   properties/{property_id}.json
//!   reviews/{review_id}.json
//!   wishlist/{entry_id}.json
//!   sell_requests/{request_id}.json
//! ```
//!
//! Writes are atomic per document (temp file + rename); there are no
//! multi-document transactions.

pub mod document_fs;
pub mod paths;
pub mod repository;

pub use document_fs::{DocumentStore, StoreError, StoreResult};
pub use paths::StorePaths;
pub use repository::{
    PropertyRepository, ReviewRepository, SellRequestRepository, UserRepository,
    WishlistRepository,
};
