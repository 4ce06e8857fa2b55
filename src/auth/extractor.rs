// SPDX-License-Identifier: AGPL-3.0-or-later

//! Axum extractor for verified token claims.
//!
//! Use the `Auth` extractor in handlers that need the caller's identity:
//!
//! ```rust,ignore
//! async fn my_handler(Auth(claims): Auth) -> impl IntoResponse {
//!     // claims.email is the verified caller identity
//! }
//! ```

use axum::{extract::FromRequestParts, http::request::Parts};

use crate::state::AppState;

use super::{middleware::claims_from_headers, AuthError, Claims};

/// Extractor for verified token claims.
///
/// If the [`authenticate`](super::middleware::authenticate) middleware
/// already ran, the claims come from the request extensions; otherwise the
/// bearer token is verified here directly. Either way an invalid or missing
/// token rejects the request with 401.
pub struct Auth(pub Claims);

impl FromRequestParts<AppState> for Auth {
    type Rejection = AuthError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        // First check if middleware already attached the claims
        if let Some(claims) = parts.extensions.get::<Claims>().cloned() {
            return Ok(Auth(claims));
        }

        let claims = claims_from_headers(state, &parts.headers)?;
        Ok(Auth(claims))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::token::issue_token;
    use axum::http::Request;

    #[tokio::test]
    async fn extractor_requires_auth_header() {
        let (state, _guard) = AppState::for_tests();
        let mut parts = Request::builder()
            .uri("/test")
            .body(())
            .unwrap()
            .into_parts()
            .0;

        let result = Auth::from_request_parts(&mut parts, &state).await;
        assert!(matches!(result, Err(AuthError::MissingAuthHeader)));
    }

    #[tokio::test]
    async fn extractor_verifies_bearer_token() {
        let (state, _guard) = AppState::for_tests();
        let token = issue_token(&state.auth.secret, "a@x.com", 3600).unwrap();
        let mut parts = Request::builder()
            .uri("/test")
            .header("Authorization", format!("Bearer {token}"))
            .body(())
            .unwrap()
            .into_parts()
            .0;

        let result = Auth::from_request_parts(&mut parts, &state).await;
        assert_eq!(result.unwrap().0.email, "a@x.com");
    }

    #[tokio::test]
    async fn extractor_prefers_extensions() {
        let (state, _guard) = AppState::for_tests();
        let mut parts = Request::builder()
            .uri("/test")
            .body(())
            .unwrap()
            .into_parts()
            .0;

        let claims = Claims {
            email: "middleware@x.com".to_string(),
            iat: 0,
            exp: 0,
        };
        parts.extensions.insert(claims.clone());

        let result = Auth::from_request_parts(&mut parts, &state).await;
        assert_eq!(result.unwrap().0, claims);
    }

    #[tokio::test]
    async fn extractor_rejects_tampered_token() {
        let (state, _guard) = AppState::for_tests();
        let token = issue_token("some-other-secret", "a@x.com", 3600).unwrap();
        let mut parts = Request::builder()
            .uri("/test")
            .header("Authorization", format!("Bearer {token}"))
            .body(())
            .unwrap()
            .into_parts()
            .0;

        let result = Auth::from_request_parts(&mut parts, &state).await;
        assert!(matches!(result, Err(AuthError::InvalidSignature)));
    }
}
