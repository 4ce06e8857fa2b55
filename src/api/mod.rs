// SPDX-License-Identifier: AGPL-3.0-or-later

//! HTTP API: route table, guard chain and OpenAPI document.
//!
//! Routes are grouped by guard level:
//!
//! - `public` - no token required
//! - `authed` - token verified ([`authenticate`](crate::auth::authenticate))
//! - `admin` / `agent` - token verified, then the stored role re-read and
//!   matched against the required role
//!
//! Guards are route layers; the outermost layer runs first, so the verifier
//! is added last on the role-gated groups.

use axum::{
    middleware,
    routing::{delete, get, patch, post, put},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    auth as auth_mw,
    models::{
        CreatePropertyRequest, CreateReviewRequest, CreateSellRequest, CreateUserRequest,
        CreateWishlistRequest, Property, Review, SellRequest, TouchLoginRequest,
        UpdatePropertyRequest, UpdateSellRequestStatus, User, WishlistEntry,
    },
    state::AppState,
};

pub mod auth;
pub mod health;
pub mod properties;
pub mod reviews;
pub mod sell_requests;
pub mod users;
pub mod wishlist;

pub fn router(state: AppState) -> Router {
    let public = Router::new()
        .route("/", get(health::root))
        .route("/health", get(health::health))
        .route("/jwt", post(auth::issue_jwt))
        .route("/logout", post(auth::logout))
        .route("/users", post(users::create_user).patch(users::touch_login))
        .route("/property", get(properties::list_properties))
        .route("/property/{id}", get(properties::get_property))
        .route("/get-reviews", get(reviews::list_reviews));

    let authed = Router::new()
        .route("/users/admin/{email}", get(users::admin_flag))
        .route("/users/agent/{email}", get(users::agent_flag))
        .route("/reviews/{email}", get(reviews::reviews_by_reviewer))
        .route("/reviews", post(reviews::create_review))
        .route("/delete-reviews/{id}", delete(reviews::delete_review))
        .route("/wishlist/{email}", get(wishlist::wishlist_by_user))
        .route("/wishlist", post(wishlist::add_to_wishlist))
        .route(
            "/delete-wishlist/{id}",
            delete(wishlist::remove_from_wishlist),
        )
        .route(
            "/sell-requests/{email}",
            get(sell_requests::sell_requests_by_buyer),
        )
        .route("/sell-requests", post(sell_requests::create_sell_request))
        .route(
            "/delete-sell-requests/{id}",
            delete(sell_requests::delete_sell_request),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_mw::authenticate,
        ));

    let admin = Router::new()
        .route("/users", get(users::list_users))
        .route("/users/admin/{email}", patch(users::set_admin))
        .route("/users/agent/{email}", patch(users::set_agent))
        .route("/users/fraud/{id}", patch(users::set_fraud))
        .route("/users/{id}", delete(users::delete_user))
        .route("/property/{id}", patch(properties::verify_property))
        .route("/property/reject/{id}", patch(properties::reject_property))
        .route(
            "/advertise-property/{id}",
            patch(properties::advertise_property),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_mw::require_admin,
        ))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_mw::authenticate,
        ));

    let agent = Router::new()
        .route("/property", post(properties::create_property))
        .route(
            "/property/{id}",
            put(properties::update_property).delete(properties::delete_property),
        )
        .route("/sell-requests", get(sell_requests::list_sell_requests))
        .route(
            "/sell-requests/status/{id}",
            patch(sell_requests::update_sell_request_status),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_mw::require_agent,
        ))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_mw::authenticate,
        ));

    Router::new()
        .merge(public)
        .merge(authed)
        .merge(admin)
        .merge(agent)
        .merge(SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[derive(OpenApi)]
#[openapi(
    paths(
        health::root,
        health::health,
        auth::issue_jwt,
        auth::logout,
        users::list_users,
        users::create_user,
        users::touch_login,
        users::admin_flag,
        users::agent_flag,
        users::set_admin,
        users::set_agent,
        users::set_fraud,
        users::delete_user,
        properties::list_properties,
        properties::get_property,
        properties::create_property,
        properties::update_property,
        properties::delete_property,
        properties::verify_property,
        properties::reject_property,
        properties::advertise_property,
        reviews::list_reviews,
        reviews::reviews_by_reviewer,
        reviews::create_review,
        reviews::delete_review,
        wishlist::wishlist_by_user,
        wishlist::add_to_wishlist,
        wishlist::remove_from_wishlist,
        sell_requests::list_sell_requests,
        sell_requests::sell_requests_by_buyer,
        sell_requests::create_sell_request,
        sell_requests::update_sell_request_status,
        sell_requests::delete_sell_request
    ),
    components(
        schemas(
            User,
            CreateUserRequest,
            TouchLoginRequest,
            Property,
            CreatePropertyRequest,
            UpdatePropertyRequest,
            Review,
            CreateReviewRequest,
            WishlistEntry,
            CreateWishlistRequest,
            SellRequest,
            CreateSellRequest,
            UpdateSellRequestStatus,
            auth::TokenRequest,
            auth::TokenResponse,
            auth::LogoutResponse,
            users::InsertUserResponse,
            users::AdminFlagResponse,
            users::AgentFlagResponse,
            health::HealthResponse
        )
    ),
    tags(
        (name = "Health", description = "Liveness and store probes"),
        (name = "Auth", description = "Token issuing and sign-out"),
        (name = "Users", description = "Accounts and role administration"),
        (name = "Properties", description = "Listings and moderation"),
        (name = "Reviews", description = "Property reviews"),
        (name = "Wishlist", description = "Saved properties"),
        (name = "Sell Requests", description = "Purchase offers")
    )
)]
struct ApiDoc;
