// SPDX-License-Identifier: AGPL-3.0-or-later

//! Review endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::ApiError,
    models::{CreateReviewRequest, Review},
    state::AppState,
    storage::ReviewRepository,
};

/// List all reviews (public board on the landing page).
#[utoipa::path(
    get,
    path = "/get-reviews",
    tag = "Reviews",
    responses((status = 200, description = "All reviews", body = [Review]))
)]
pub async fn list_reviews(State(state): State<AppState>) -> Result<Json<Vec<Review>>, ApiError> {
    let reviews = ReviewRepository::new(&state.store).list_all()?;
    Ok(Json(reviews))
}

/// List reviews written by a reviewer.
#[utoipa::path(
    get,
    path = "/reviews/{email}",
    tag = "Reviews",
    security(("bearer" = [])),
    params(("email" = String, Path, description = "Reviewer email")),
    responses(
        (status = 200, description = "Reviews by this reviewer", body = [Review]),
        (status = 401, description = "Missing or invalid token"),
    )
)]
pub async fn reviews_by_reviewer(
    Path(email): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<Vec<Review>>, ApiError> {
    let reviews = ReviewRepository::new(&state.store).list_by_reviewer(&email)?;
    Ok(Json(reviews))
}

/// Create a review.
#[utoipa::path(
    post,
    path = "/reviews",
    tag = "Reviews",
    security(("bearer" = [])),
    request_body = CreateReviewRequest,
    responses(
        (status = 201, description = "Created review", body = Review),
        (status = 401, description = "Missing or invalid token"),
    )
)]
pub async fn create_review(
    State(state): State<AppState>,
    Json(request): Json<CreateReviewRequest>,
) -> Result<(StatusCode, Json<Review>), ApiError> {
    let review = ReviewRepository::new(&state.store).create(request)?;
    Ok((StatusCode::CREATED, Json(review)))
}

/// Delete a review.
#[utoipa::path(
    delete,
    path = "/delete-reviews/{id}",
    tag = "Reviews",
    security(("bearer" = [])),
    params(("id" = String, Path, description = "Review ID")),
    responses(
        (status = 204, description = "Review deleted"),
        (status = 404, description = "No such review"),
    )
)]
pub async fn delete_review(
    Path(review_id): Path<String>,
    State(state): State<AppState>,
) -> Result<StatusCode, ApiError> {
    ReviewRepository::new(&state.store).delete(&review_id)?;
    Ok(StatusCode::NO_CONTENT)
}
