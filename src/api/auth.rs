// SPDX-License-Identifier: AGPL-3.0-or-later

//! Sign-in and sign-out endpoints.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{auth::issue_token, error::ApiError, state::AppState};

/// Request to issue an access token.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TokenRequest {
    /// Email of the signing-in account.
    pub email: String,
}

/// Response carrying a freshly issued access token.
#[derive(Debug, Serialize, ToSchema)]
pub struct TokenResponse {
    pub success: bool,
    /// HS256 access token; send as `Authorization: Bearer <token>`.
    pub token: String,
}

/// Sign-out acknowledgement.
#[derive(Debug, Serialize, ToSchema)]
pub struct LogoutResponse {
    pub success: bool,
}

/// Issue an access token for the given email.
///
/// The token embeds identity only; the caller's role is looked up in the
/// user store on every guarded request.
#[utoipa::path(
    post,
    path = "/jwt",
    tag = "Auth",
    request_body = TokenRequest,
    responses((status = 200, description = "Token issued", body = TokenResponse))
)]
pub async fn issue_jwt(
    State(state): State<AppState>,
    Json(request): Json<TokenRequest>,
) -> Result<Json<TokenResponse>, ApiError> {
    tracing::debug!(email = %request.email, "issuing access token");

    let token = issue_token(
        &state.auth.secret,
        &request.email,
        state.auth.token_ttl_secs,
    )
    .map_err(|e| {
        tracing::error!(error = %e, "token signing failed");
        ApiError::internal("internal server error")
    })?;

    Ok(Json(TokenResponse {
        success: true,
        token,
    }))
}

/// Acknowledge a sign-out.
///
/// Tokens are stateless, so there is nothing to revoke server-side; clients
/// discard the token.
#[utoipa::path(
    post,
    path = "/logout",
    tag = "Auth",
    responses((status = 200, description = "Signed out", body = LogoutResponse))
)]
pub async fn logout() -> Json<LogoutResponse> {
    Json(LogoutResponse { success: true })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::verify_token;

    #[tokio::test]
    async fn issued_token_verifies_with_the_shared_secret() {
        let (state, _guard) = AppState::for_tests();

        let Json(response) = issue_jwt(
            State(state.clone()),
            Json(TokenRequest {
                email: "a@x.com".into(),
            }),
        )
        .await
        .expect("token issuing succeeds");

        assert!(response.success);
        let claims = verify_token(&state.auth.secret, &response.token).unwrap();
        assert_eq!(claims.email, "a@x.com");
    }

    #[tokio::test]
    async fn logout_acknowledges() {
        let Json(response) = logout().await;
        assert!(response.success);
    }
}
