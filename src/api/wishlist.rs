// SPDX-License-Identifier: AGPL-3.0-or-later

//! Wishlist endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::ApiError,
    models::{CreateWishlistRequest, WishlistEntry},
    state::AppState,
    storage::WishlistRepository,
};

/// List the wishlist of a user.
#[utoipa::path(
    get,
    path = "/wishlist/{email}",
    tag = "Wishlist",
    security(("bearer" = [])),
    params(("email" = String, Path, description = "Owner email")),
    responses(
        (status = 200, description = "Wishlist entries", body = [WishlistEntry]),
        (status = 401, description = "Missing or invalid token"),
    )
)]
pub async fn wishlist_by_user(
    Path(email): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<Vec<WishlistEntry>>, ApiError> {
    let entries = WishlistRepository::new(&state.store).list_by_user(&email)?;
    Ok(Json(entries))
}

/// Add a property to a wishlist.
#[utoipa::path(
    post,
    path = "/wishlist",
    tag = "Wishlist",
    security(("bearer" = [])),
    request_body = CreateWishlistRequest,
    responses(
        (status = 201, description = "Created entry", body = WishlistEntry),
        (status = 401, description = "Missing or invalid token"),
    )
)]
pub async fn add_to_wishlist(
    State(state): State<AppState>,
    Json(request): Json<CreateWishlistRequest>,
) -> Result<(StatusCode, Json<WishlistEntry>), ApiError> {
    let entry = WishlistRepository::new(&state.store).create(request)?;
    Ok((StatusCode::CREATED, Json(entry)))
}

/// Remove a wishlist entry.
#[utoipa::path(
    delete,
    path = "/delete-wishlist/{id}",
    tag = "Wishlist",
    security(("bearer" = [])),
    params(("id" = String, Path, description = "Entry ID")),
    responses(
        (status = 204, description = "Entry removed"),
        (status = 404, description = "No such entry"),
    )
)]
pub async fn remove_from_wishlist(
    Path(entry_id): Path<String>,
    State(state): State<AppState>,
) -> Result<StatusCode, ApiError> {
    WishlistRepository::new(&state.store).delete(&entry_id)?;
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn add_list_and_remove() {
        let (state, _guard) = AppState::for_tests();

        let (status, Json(entry)) = add_to_wishlist(
            State(state.clone()),
            Json(CreateWishlistRequest {
                user_email: "a@x.com".into(),
                property_id: "prop-1".into(),
            }),
        )
        .await
        .unwrap();
        assert_eq!(status, StatusCode::CREATED);

        let Json(entries) = wishlist_by_user(Path("a@x.com".into()), State(state.clone()))
            .await
            .unwrap();
        assert_eq!(entries, vec![entry.clone()]);

        let status = remove_from_wishlist(Path(entry.id), State(state.clone()))
            .await
            .unwrap();
        assert_eq!(status, StatusCode::NO_CONTENT);

        let Json(entries) = wishlist_by_user(Path("a@x.com".into()), State(state))
            .await
            .unwrap();
        assert!(entries.is_empty());
    }
}
