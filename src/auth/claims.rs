// SPDX-License-Identifier: AGPL-3.0-or-later

//! Access token claims.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Claims embedded in an access token.
///
/// The token deliberately carries identity only. Authorization data (the
/// role) lives in the user store and is re-read on every guarded request,
/// so a revoked role takes effect immediately.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct Claims {
    /// Email of the signed-in account (the store lookup key).
    pub email: String,
    /// Issued at (Unix timestamp).
    pub iat: i64,
    /// Expiration (Unix timestamp).
    pub exp: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn claims_round_trip_json() {
        let claims = Claims {
            email: "a@x.com".to_string(),
            iat: 1_700_000_000,
            exp: 1_700_003_600,
        };
        let json = serde_json::to_string(&claims).unwrap();
        let back: Claims = serde_json::from_str(&json).unwrap();
        assert_eq!(back, claims);
    }
}
