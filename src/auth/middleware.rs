// SPDX-License-Identifier: AGPL-3.0-or-later

//! Authentication and authorization middleware.
//!
//! The guard chain is an ordered list of request interceptors. Each either
//! proceeds with an annotated request or short-circuits with a terminal
//! response:
//!
//! 1. [`authenticate`] verifies the bearer token and attaches [`Claims`] to
//!    the request extensions.
//! 2. [`require_admin`] / [`require_agent`] resolve the caller's stored role
//!    with one fresh read against the user store and deny on mismatch.
//!
//! The role is never taken from the token, so a role revoked after token
//! issuance is enforced on the very next request.

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::models::Role;
use crate::state::AppState;
use crate::storage::UserRepository;

use super::{token::verify_token, AuthError, Claims};

/// Token Verifier middleware.
///
/// Extracts a bearer token from the `Authorization` header, verifies it and
/// attaches the decoded claims to the request for downstream interceptors
/// and handlers. Rejects with 401 otherwise.
pub async fn authenticate(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let claims = match claims_from_request(&state, &request) {
        Ok(claims) => claims,
        Err(e) => return e.into_response(),
    };

    request.extensions_mut().insert(claims);
    next.run(request).await
}

/// Role Authorizer middleware requiring the `admin` role.
///
/// Must run after [`authenticate`] has attached claims.
pub async fn require_admin(State(state): State<AppState>, request: Request, next: Next) -> Response {
    require_role(state, request, next, Role::Admin).await
}

/// Role Authorizer middleware requiring the `agent` role.
///
/// Must run after [`authenticate`] has attached claims.
pub async fn require_agent(State(state): State<AppState>, request: Request, next: Next) -> Response {
    require_role(state, request, next, Role::Agent).await
}

async fn require_role(state: AppState, request: Request, next: Next, required: Role) -> Response {
    // Claims must already be attached; a missing extension means the
    // verifier did not run, which reads as an unauthenticated request.
    let Some(claims) = request.extensions().get::<Claims>() else {
        return AuthError::MissingAuthHeader.into_response();
    };

    match resolve_role(&state, &claims.email) {
        Ok(role) if role == required => next.run(request).await,
        Ok(_) => AuthError::Forbidden.into_response(),
        Err(e) => e.into_response(),
    }
}

/// One fresh read of the caller's stored role. No caching.
fn resolve_role(state: &AppState, email: &str) -> Result<Role, AuthError> {
    let repo = UserRepository::new(&state.store);
    let user = repo
        .find_by_email(email)
        .map_err(|e| AuthError::RoleLookupFailed(e.to_string()))?
        .ok_or(AuthError::Forbidden)?;
    Ok(user.role)
}

/// Extract and verify the bearer token on a request.
fn claims_from_request(state: &AppState, request: &Request) -> Result<Claims, AuthError> {
    claims_from_headers(state, request.headers())
}

/// Extract and verify the bearer token from a header map.
///
/// Shared with the `Auth` extractor, which only has request parts.
pub(super) fn claims_from_headers(
    state: &AppState,
    headers: &axum::http::HeaderMap,
) -> Result<Claims, AuthError> {
    let auth_header = headers
        .get(AUTHORIZATION)
        .ok_or(AuthError::MissingAuthHeader)?
        .to_str()
        .map_err(|_| AuthError::InvalidAuthHeader)?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or(AuthError::InvalidAuthHeader)?
        .trim();

    verify_token(&state.auth.secret, token)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::token::issue_token;
    use axum::body::Body;
    use axum::http::Request as HttpRequest;

    fn request_with_header(value: Option<&str>) -> Request {
        let builder = HttpRequest::builder().uri("/test");
        let builder = match value {
            Some(v) => builder.header(AUTHORIZATION, v),
            None => builder,
        };
        builder.body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn claims_require_auth_header() {
        let (state, _guard) = AppState::for_tests();
        let request = request_with_header(None);

        let result = claims_from_request(&state, &request);
        assert!(matches!(result, Err(AuthError::MissingAuthHeader)));
    }

    #[tokio::test]
    async fn claims_require_bearer_scheme() {
        let (state, _guard) = AppState::for_tests();
        let request = request_with_header(Some("Basic abc123"));

        let result = claims_from_request(&state, &request);
        assert!(matches!(result, Err(AuthError::InvalidAuthHeader)));
    }

    #[tokio::test]
    async fn claims_round_trip_through_header() {
        let (state, _guard) = AppState::for_tests();
        let token = issue_token(&state.auth.secret, "a@x.com", 3600).unwrap();
        let request = request_with_header(Some(&format!("Bearer {token}")));

        let claims = claims_from_request(&state, &request).unwrap();
        assert_eq!(claims.email, "a@x.com");
    }

    #[tokio::test]
    async fn resolve_role_reads_fresh_from_store() {
        let (state, _guard) = AppState::for_tests();
        let repo = UserRepository::new(&state.store);
        let user = repo.insert_if_absent("a@x.com", None).unwrap().unwrap();

        assert_eq!(resolve_role(&state, "a@x.com").unwrap(), Role::User);

        // Role change is visible on the next lookup without reissuing a token.
        repo.set_role(&user.id, Role::Admin).unwrap();
        assert_eq!(resolve_role(&state, "a@x.com").unwrap(), Role::Admin);
    }

    #[tokio::test]
    async fn resolve_role_unknown_user_is_forbidden() {
        let (state, _guard) = AppState::for_tests();
        let result = resolve_role(&state, "ghost@x.com");
        assert!(matches!(result, Err(AuthError::Forbidden)));
    }
}
