// SPDX-License-Identifier: AGPL-3.0-or-later

//! # Authentication Module
//!
//! Bearer-token authentication and role-based authorization.
//!
//! ## Auth Flow
//!
//! 1. Client signs in via `POST /jwt` with its email and receives an HS256
//!    access token (one hour lifetime by default).
//! 2. Client sends `Authorization: Bearer <token>` on every guarded request.
//! 3. Server:
//!    - Verifies signature and expiry against the shared secret
//!    - Attaches the decoded [`Claims`] to the request
//!    - For role-gated routes, re-reads the caller's stored role and denies
//!      on mismatch
//!
//! ## Security
//!
//! - Tokens carry identity only; the role always comes from the user store
//! - No revocation list and no refresh; expired tokens re-trigger sign-in
//! - Clock skew tolerance is 60 seconds

pub mod claims;
pub mod error;
pub mod extractor;
pub mod middleware;
pub mod token;

pub use claims::Claims;
pub use error::AuthError;
pub use extractor::Auth;
pub use middleware::{authenticate, require_admin, require_agent};
pub use token::{issue_token, verify_token};
