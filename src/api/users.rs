// SPDX-License-Identifier: AGPL-3.0-or-later

//! User endpoints.
//!
//! Role patches and deletes are admin-gated at the router level; the
//! role-flag reads only require a valid token whose email matches the path.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    auth::Auth,
    error::ApiError,
    models::{CreateUserRequest, Role, TouchLoginRequest, User},
    state::AppState,
    storage::UserRepository,
};

/// Result of an idempotent user insert.
#[derive(Debug, Serialize, ToSchema)]
pub struct InsertUserResponse {
    /// `"user created"` or `"user already exists"`.
    pub message: String,
    /// ID of the created user; absent when the email was already taken.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inserted_id: Option<String>,
}

/// Response for the role-flag lookups.
#[derive(Debug, Serialize, ToSchema)]
pub struct AdminFlagResponse {
    pub admin: bool,
}

/// Response for the agent-flag lookup.
#[derive(Debug, Serialize, ToSchema)]
pub struct AgentFlagResponse {
    pub agent: bool,
}

/// List all users. Admin only.
#[utoipa::path(
    get,
    path = "/users",
    tag = "Users",
    security(("bearer" = [])),
    responses(
        (status = 200, description = "All users", body = [User]),
        (status = 401, description = "Missing or invalid token"),
        (status = 403, description = "Caller is not an admin"),
    )
)]
pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<User>>, ApiError> {
    let users = UserRepository::new(&state.store).list_all()?;
    Ok(Json(users))
}

/// Create a user on first sign-in.
///
/// Idempotent insert keyed by email: an existing email performs no insert
/// and reports "user already exists".
#[utoipa::path(
    post,
    path = "/users",
    tag = "Users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created", body = InsertUserResponse),
        (status = 200, description = "Email already registered", body = InsertUserResponse),
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    Json(request): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<InsertUserResponse>), ApiError> {
    let repo = UserRepository::new(&state.store);

    match repo.insert_if_absent(&request.email, request.name)? {
        Some(user) => Ok((
            StatusCode::CREATED,
            Json(InsertUserResponse {
                message: "user created".to_string(),
                inserted_id: Some(user.id),
            }),
        )),
        None => Ok((
            StatusCode::OK,
            Json(InsertUserResponse {
                message: "user already exists".to_string(),
                inserted_id: None,
            }),
        )),
    }
}

/// Update the last sign-in time for a user, keyed by email.
#[utoipa::path(
    patch,
    path = "/users",
    tag = "Users",
    request_body = TouchLoginRequest,
    responses(
        (status = 200, description = "Updated user", body = User),
        (status = 404, description = "No user with that email"),
    )
)]
pub async fn touch_login(
    State(state): State<AppState>,
    Json(request): Json<TouchLoginRequest>,
) -> Result<Json<User>, ApiError> {
    let user =
        UserRepository::new(&state.store).touch_login(&request.email, request.last_logged_at)?;
    Ok(Json(user))
}

/// Report whether the stored role of the given email is `admin`.
///
/// Callers may only query their own email; the flag reflects the stored
/// role at request time, not anything embedded in the token.
#[utoipa::path(
    get,
    path = "/users/admin/{email}",
    tag = "Users",
    security(("bearer" = [])),
    params(("email" = String, Path, description = "Email to check (must match the token)")),
    responses(
        (status = 200, description = "Admin flag", body = AdminFlagResponse),
        (status = 401, description = "Missing or invalid token"),
        (status = 403, description = "Token email does not match the path"),
    )
)]
pub async fn admin_flag(
    Auth(claims): Auth,
    Path(email): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<AdminFlagResponse>, ApiError> {
    if claims.email != email {
        return Err(ApiError::new(StatusCode::FORBIDDEN, "forbidden access"));
    }

    let user = UserRepository::new(&state.store).find_by_email(&email)?;
    let admin = user.is_some_and(|u| u.role == Role::Admin);
    Ok(Json(AdminFlagResponse { admin }))
}

/// Report whether the stored role of the given email is `agent`.
#[utoipa::path(
    get,
    path = "/users/agent/{email}",
    tag = "Users",
    security(("bearer" = [])),
    params(("email" = String, Path, description = "Email to check (must match the token)")),
    responses(
        (status = 200, description = "Agent flag", body = AgentFlagResponse),
        (status = 401, description = "Missing or invalid token"),
        (status = 403, description = "Token email does not match the path"),
    )
)]
pub async fn agent_flag(
    Auth(claims): Auth,
    Path(email): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<AgentFlagResponse>, ApiError> {
    if claims.email != email {
        return Err(ApiError::new(StatusCode::FORBIDDEN, "forbidden access"));
    }

    let user = UserRepository::new(&state.store).find_by_email(&email)?;
    let agent = user.is_some_and(|u| u.role == Role::Agent);
    Ok(Json(AgentFlagResponse { agent }))
}

/// Grant the `admin` role. Admin only.
#[utoipa::path(
    patch,
    path = "/users/admin/{id}",
    tag = "Users",
    security(("bearer" = [])),
    params(("id" = String, Path, description = "ID of the user to promote")),
    responses(
        (status = 200, description = "Updated user", body = User),
        (status = 404, description = "No such user"),
    )
)]
pub async fn set_admin(
    Path(user_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<User>, ApiError> {
    let user = UserRepository::new(&state.store).set_role(&user_id, Role::Admin)?;
    Ok(Json(user))
}

/// Grant the `agent` role. Admin only.
#[utoipa::path(
    patch,
    path = "/users/agent/{id}",
    tag = "Users",
    security(("bearer" = [])),
    params(("id" = String, Path, description = "ID of the user to promote")),
    responses(
        (status = 200, description = "Updated user", body = User),
        (status = 404, description = "No such user"),
    )
)]
pub async fn set_agent(
    Path(user_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<User>, ApiError> {
    let user = UserRepository::new(&state.store).set_role(&user_id, Role::Agent)?;
    Ok(Json(user))
}

/// Flag an account as fraudulent. Admin only.
#[utoipa::path(
    patch,
    path = "/users/fraud/{id}",
    tag = "Users",
    security(("bearer" = [])),
    params(("id" = String, Path, description = "ID of the user to flag")),
    responses(
        (status = 200, description = "Updated user", body = User),
        (status = 404, description = "No such user"),
    )
)]
pub async fn set_fraud(
    Path(user_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<User>, ApiError> {
    let user = UserRepository::new(&state.store).set_role(&user_id, Role::Fraud)?;
    Ok(Json(user))
}

/// Delete a user. Admin only.
#[utoipa::path(
    delete,
    path = "/users/{id}",
    tag = "Users",
    security(("bearer" = [])),
    params(("id" = String, Path, description = "ID of the user to delete")),
    responses(
        (status = 204, description = "User deleted"),
        (status = 404, description = "No such user"),
    )
)]
pub async fn delete_user(
    Path(user_id): Path<String>,
    State(state): State<AppState>,
) -> Result<StatusCode, ApiError> {
    UserRepository::new(&state.store).delete(&user_id)?;
    Ok(StatusCode::NO_CONTENT)
}
