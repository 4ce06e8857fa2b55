// SPDX-License-Identifier: AGPL-3.0-or-later

//! Realstate - Real-Estate Listing Service
//!
//! A REST backend for a property listing platform: accounts with
//! store-backed roles, listings with a moderation workflow, reviews,
//! wishlists and purchase offers.
//!
//! ## Modules
//!
//! - `api` - HTTP API handlers (Axum)
//! - `auth` - Token verification and role authorization (JWT)
//! - `storage` - JSON document store and per-collection repositories

pub mod api;
pub mod auth;
pub mod config;
pub mod error;
pub mod models;
pub mod state;
pub mod storage;
