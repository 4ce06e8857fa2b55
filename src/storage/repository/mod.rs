// SPDX-License-Identifier: AGPL-3.0-or-later

//! Repository layer providing typed access to the document store.
//!
//! Each repository provides CRUD operations for a specific entity type,
//! using the DocumentStore for all file operations.

pub mod properties;
pub mod reviews;
pub mod sell_requests;
pub mod users;
pub mod wishlist;

pub use properties::PropertyRepository;
pub use reviews::ReviewRepository;
pub use sell_requests::SellRequestRepository;
pub use users::UserRepository;
pub use wishlist::WishlistRepository;
