// SPDX-License-Identifier: AGPL-3.0-or-later

//! Liveness and store health endpoints.

use axum::{extract::State, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{error::ApiError, state::AppState};

/// Health probe response.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Always `"ok"` when the store probe passes.
    pub status: &'static str,
}

/// Liveness banner.
#[utoipa::path(
    get,
    path = "/",
    tag = "Health",
    responses((status = 200, description = "Server is up"))
)]
pub async fn root() -> &'static str {
    "Realstate server is running"
}

/// Store health probe.
///
/// Performs a write-read-delete round trip against the document store.
#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses(
        (status = 200, description = "Store reachable", body = HealthResponse),
        (status = 500, description = "Store probe failed"),
    )
)]
pub async fn health(State(state): State<AppState>) -> Result<Json<HealthResponse>, ApiError> {
    state.store.health_check()?;
    Ok(Json(HealthResponse { status: "ok" }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn health_passes_on_initialized_store() {
        let (state, _guard) = AppState::for_tests();
        let Json(body) = health(State(state)).await.expect("health probe passes");
        assert_eq!(body.status, "ok");
    }
}
