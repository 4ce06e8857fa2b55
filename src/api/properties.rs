// SPDX-License-Identifier: AGPL-3.0-or-later

//! Property endpoints.
//!
//! Agents create and maintain listings; admins verify, reject and advertise
//! them. The guards live at the router level.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::ApiError,
    models::{CreatePropertyRequest, Property, PropertyStatus, UpdatePropertyRequest},
    state::AppState,
    storage::PropertyRepository,
};

/// List all property listings.
#[utoipa::path(
    get,
    path = "/property",
    tag = "Properties",
    responses((status = 200, description = "All listings", body = [Property]))
)]
pub async fn list_properties(
    State(state): State<AppState>,
) -> Result<Json<Vec<Property>>, ApiError> {
    let properties = PropertyRepository::new(&state.store).list_all()?;
    Ok(Json(properties))
}

/// Fetch a single listing.
#[utoipa::path(
    get,
    path = "/property/{id}",
    tag = "Properties",
    params(("id" = String, Path, description = "Listing ID")),
    responses(
        (status = 200, description = "The listing", body = Property),
        (status = 404, description = "No such listing"),
    )
)]
pub async fn get_property(
    Path(property_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<Property>, ApiError> {
    let property = PropertyRepository::new(&state.store).get(&property_id)?;
    Ok(Json(property))
}

/// Create a listing. Agent only; new listings start as `pending`.
#[utoipa::path(
    post,
    path = "/property",
    tag = "Properties",
    security(("bearer" = [])),
    request_body = CreatePropertyRequest,
    responses(
        (status = 201, description = "Created listing", body = Property),
        (status = 401, description = "Missing or invalid token"),
        (status = 403, description = "Caller is not an agent"),
    )
)]
pub async fn create_property(
    State(state): State<AppState>,
    Json(request): Json<CreatePropertyRequest>,
) -> Result<(StatusCode, Json<Property>), ApiError> {
    let property = PropertyRepository::new(&state.store).create(request)?;
    Ok((StatusCode::CREATED, Json(property)))
}

/// Replace the mutable fields of a listing. Agent only.
#[utoipa::path(
    put,
    path = "/property/{id}",
    tag = "Properties",
    security(("bearer" = [])),
    params(("id" = String, Path, description = "Listing ID")),
    request_body = UpdatePropertyRequest,
    responses(
        (status = 200, description = "Updated listing", body = Property),
        (status = 404, description = "No such listing"),
    )
)]
pub async fn update_property(
    Path(property_id): Path<String>,
    State(state): State<AppState>,
    Json(request): Json<UpdatePropertyRequest>,
) -> Result<Json<Property>, ApiError> {
    let property = PropertyRepository::new(&state.store).update(&property_id, request)?;
    Ok(Json(property))
}

/// Delete a listing. Agent only.
#[utoipa::path(
    delete,
    path = "/property/{id}",
    tag = "Properties",
    security(("bearer" = [])),
    params(("id" = String, Path, description = "Listing ID")),
    responses(
        (status = 204, description = "Listing deleted"),
        (status = 404, description = "No such listing"),
    )
)]
pub async fn delete_property(
    Path(property_id): Path<String>,
    State(state): State<AppState>,
) -> Result<StatusCode, ApiError> {
    PropertyRepository::new(&state.store).delete(&property_id)?;
    Ok(StatusCode::NO_CONTENT)
}

/// Mark a listing `verified`. Admin only.
#[utoipa::path(
    patch,
    path = "/property/{id}",
    tag = "Properties",
    security(("bearer" = [])),
    params(("id" = String, Path, description = "Listing ID")),
    responses(
        (status = 200, description = "Updated listing", body = Property),
        (status = 404, description = "No such listing"),
    )
)]
pub async fn verify_property(
    Path(property_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<Property>, ApiError> {
    let property =
        PropertyRepository::new(&state.store).set_status(&property_id, PropertyStatus::Verified)?;
    Ok(Json(property))
}

/// Mark a listing `rejected`. Admin only.
#[utoipa::path(
    patch,
    path = "/property/reject/{id}",
    tag = "Properties",
    security(("bearer" = [])),
    params(("id" = String, Path, description = "Listing ID")),
    responses(
        (status = 200, description = "Updated listing", body = Property),
        (status = 404, description = "No such listing"),
    )
)]
pub async fn reject_property(
    Path(property_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<Property>, ApiError> {
    let property =
        PropertyRepository::new(&state.store).set_status(&property_id, PropertyStatus::Rejected)?;
    Ok(Json(property))
}

/// Feature a listing on the advertisement board. Admin only.
#[utoipa::path(
    patch,
    path = "/advertise-property/{id}",
    tag = "Properties",
    security(("bearer" = [])),
    params(("id" = String, Path, description = "Listing ID")),
    responses(
        (status = 200, description = "Updated listing", body = Property),
        (status = 404, description = "No such listing"),
    )
)]
pub async fn advertise_property(
    Path(property_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<Property>, ApiError> {
    let property = PropertyRepository::new(&state.store).set_advertised(&property_id, true)?;
    Ok(Json(property))
}
