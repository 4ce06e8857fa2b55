// SPDX-License-Identifier: AGPL-3.0-or-later

//! Sell request endpoints.
//!
//! Users make purchase offers; agents review the full queue and accept or
//! reject them.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::ApiError,
    models::{CreateSellRequest, SellRequest, UpdateSellRequestStatus},
    state::AppState,
    storage::SellRequestRepository,
};

/// List all sell requests. Agent only.
#[utoipa::path(
    get,
    path = "/sell-requests",
    tag = "Sell Requests",
    security(("bearer" = [])),
    responses(
        (status = 200, description = "All sell requests", body = [SellRequest]),
        (status = 401, description = "Missing or invalid token"),
        (status = 403, description = "Caller is not an agent"),
    )
)]
pub async fn list_sell_requests(
    State(state): State<AppState>,
) -> Result<Json<Vec<SellRequest>>, ApiError> {
    let requests = SellRequestRepository::new(&state.store).list_all()?;
    Ok(Json(requests))
}

/// List the sell requests made by a buyer.
#[utoipa::path(
    get,
    path = "/sell-requests/{email}",
    tag = "Sell Requests",
    security(("bearer" = [])),
    params(("email" = String, Path, description = "Buyer email")),
    responses(
        (status = 200, description = "Sell requests by this buyer", body = [SellRequest]),
        (status = 401, description = "Missing or invalid token"),
    )
)]
pub async fn sell_requests_by_buyer(
    Path(email): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<Vec<SellRequest>>, ApiError> {
    let requests = SellRequestRepository::new(&state.store).list_by_buyer(&email)?;
    Ok(Json(requests))
}

/// Create a purchase offer.
#[utoipa::path(
    post,
    path = "/sell-requests",
    tag = "Sell Requests",
    security(("bearer" = [])),
    request_body = CreateSellRequest,
    responses(
        (status = 201, description = "Created sell request", body = SellRequest),
        (status = 401, description = "Missing or invalid token"),
    )
)]
pub async fn create_sell_request(
    State(state): State<AppState>,
    Json(request): Json<CreateSellRequest>,
) -> Result<(StatusCode, Json<SellRequest>), ApiError> {
    let sell_request = SellRequestRepository::new(&state.store).create(request)?;
    Ok((StatusCode::CREATED, Json(sell_request)))
}

/// Accept or reject an offer. Agent only.
#[utoipa::path(
    patch,
    path = "/sell-requests/status/{id}",
    tag = "Sell Requests",
    security(("bearer" = [])),
    params(("id" = String, Path, description = "Sell request ID")),
    request_body = UpdateSellRequestStatus,
    responses(
        (status = 200, description = "Updated sell request", body = SellRequest),
        (status = 404, description = "No such sell request"),
    )
)]
pub async fn update_sell_request_status(
    Path(request_id): Path<String>,
    State(state): State<AppState>,
    Json(request): Json<UpdateSellRequestStatus>,
) -> Result<Json<SellRequest>, ApiError> {
    let sell_request =
        SellRequestRepository::new(&state.store).set_status(&request_id, request.status)?;
    Ok(Json(sell_request))
}

/// Delete a sell request.
#[utoipa::path(
    delete,
    path = "/delete-sell-requests/{id}",
    tag = "Sell Requests",
    security(("bearer" = [])),
    params(("id" = String, Path, description = "Sell request ID")),
    responses(
        (status = 204, description = "Sell request deleted"),
        (status = 404, description = "No such sell request"),
    )
)]
pub async fn delete_sell_request(
    Path(request_id): Path<String>,
    State(state): State<AppState>,
) -> Result<StatusCode, ApiError> {
    SellRequestRepository::new(&state.store).delete(&request_id)?;
    Ok(StatusCode::NO_CONTENT)
}
