// SPDX-License-Identifier: AGPL-3.0-or-later

//! # API Data Models
//!
//! Request and response data structures used by the REST API, plus the
//! stored document shapes. All types derive `Serialize`, `Deserialize` and
//! `ToSchema` for automatic JSON handling and OpenAPI documentation.
//!
//! ## Model Categories
//!
//! - **Users**: platform accounts keyed by email, carrying a role
//! - **Properties**: listings created by agents, verified by admins
//! - **Reviews**: user comments attached to a property
//! - **Wishlist**: per-user saved properties
//! - **Sell Requests**: purchase offers from users against a listing

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// =============================================================================
// Roles
// =============================================================================

/// User roles for authorization.
///
/// ## Role Semantics
///
/// - `User` - Default role for every signed-in account
/// - `Admin` - Manages users and moderates listings
/// - `Agent` - Creates and maintains property listings
/// - `Fraud` - Flagged account; an agent marked fraud loses listing rights
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Default role for authenticated accounts.
    #[default]
    User,
    /// Administrative access to user and listing moderation.
    Admin,
    /// Property agent (owns listings).
    Agent,
    /// Account flagged as fraudulent.
    Fraud,
}

impl Role {
    /// Parse a role from its lowercase string form.
    pub fn parse(s: &str) -> Option<Role> {
        match s.to_lowercase().as_str() {
            "user" => Some(Role::User),
            "admin" => Some(Role::Admin),
            "agent" => Some(Role::Agent),
            "fraud" => Some(Role::Fraud),
            _ => None,
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::User => write!(f, "user"),
            Role::Admin => write!(f, "admin"),
            Role::Agent => write!(f, "agent"),
            Role::Fraud => write!(f, "fraud"),
        }
    }
}

// =============================================================================
// User Models
// =============================================================================

/// A platform account, keyed by email.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct User {
    /// Unique identifier (UUID).
    pub id: String,
    /// Email address, the unique lookup key.
    pub email: String,
    /// Optional display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Current role; authorization is always checked against this field.
    #[serde(default)]
    pub role: Role,
    /// Last sign-in time.
    pub last_logged_at: DateTime<Utc>,
}

/// Request to create a user (idempotent insert keyed by email).
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateUserRequest {
    /// Email address of the account.
    pub email: String,
    /// Optional display name.
    #[serde(default)]
    pub name: Option<String>,
}

/// Request to update the last sign-in time for a user.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TouchLoginRequest {
    /// Email address of the account.
    pub email: String,
    /// New last sign-in time.
    pub last_logged_at: DateTime<Utc>,
}

// =============================================================================
// Property Models
// =============================================================================

/// Verification state of a property listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum PropertyStatus {
    /// Newly created, awaiting admin verification.
    #[default]
    Pending,
    /// Approved by an admin and visible for offers.
    Verified,
    /// Rejected by an admin.
    Rejected,
}

/// A property listing owned by an agent.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct Property {
    /// Unique identifier (UUID).
    pub id: String,
    /// Listing title.
    pub title: String,
    /// Location of the property.
    pub location: String,
    /// Lower bound of the asking price range.
    pub price_min: f64,
    /// Upper bound of the asking price range.
    pub price_max: f64,
    /// Free-form description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Cover image URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Display name of the listing agent.
    pub agent_name: String,
    /// Email of the listing agent.
    pub agent_email: String,
    /// Verification state.
    #[serde(default)]
    pub status: PropertyStatus,
    /// Whether the listing is featured on the advertisement board.
    #[serde(default)]
    pub advertised: bool,
    /// When the listing was created.
    pub created_at: DateTime<Utc>,
}

/// Request to create a property listing. New listings start as `pending`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreatePropertyRequest {
    /// Listing title.
    pub title: String,
    /// Location of the property.
    pub location: String,
    /// Lower bound of the asking price range.
    pub price_min: f64,
    /// Upper bound of the asking price range.
    pub price_max: f64,
    /// Free-form description.
    #[serde(default)]
    pub description: Option<String>,
    /// Cover image URL.
    #[serde(default)]
    pub image_url: Option<String>,
    /// Display name of the listing agent.
    pub agent_name: String,
    /// Email of the listing agent.
    pub agent_email: String,
}

/// Request to replace the mutable fields of a listing.
///
/// Verification status and the advertised flag are admin-controlled and not
/// touched by this request.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdatePropertyRequest {
    /// Updated title.
    pub title: String,
    /// Updated location.
    pub location: String,
    /// Updated lower price bound.
    pub price_min: f64,
    /// Updated upper price bound.
    pub price_max: f64,
    /// Updated description.
    #[serde(default)]
    pub description: Option<String>,
    /// Updated cover image URL.
    #[serde(default)]
    pub image_url: Option<String>,
}

// =============================================================================
// Review Models
// =============================================================================

/// A user review attached to a property listing.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct Review {
    /// Unique identifier (UUID).
    pub id: String,
    /// The reviewed property.
    pub property_id: String,
    /// Title of the reviewed property, denormalized for display.
    pub property_title: String,
    /// Email of the reviewer.
    pub reviewer_email: String,
    /// Display name of the reviewer.
    pub reviewer_name: String,
    /// Review text.
    pub comment: String,
    /// When the review was written.
    pub created_at: DateTime<Utc>,
}

/// Request to create a review.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateReviewRequest {
    /// The reviewed property.
    pub property_id: String,
    /// Title of the reviewed property.
    pub property_title: String,
    /// Email of the reviewer.
    pub reviewer_email: String,
    /// Display name of the reviewer.
    pub reviewer_name: String,
    /// Review text.
    pub comment: String,
}

// =============================================================================
// Wishlist Models
// =============================================================================

/// A property saved to a user's wishlist.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct WishlistEntry {
    /// Unique identifier (UUID).
    pub id: String,
    /// Email of the owning user.
    pub user_email: String,
    /// The saved property.
    pub property_id: String,
    /// When the entry was added.
    pub added_at: DateTime<Utc>,
}

/// Request to add a property to a wishlist.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateWishlistRequest {
    /// Email of the owning user.
    pub user_email: String,
    /// The property to save.
    pub property_id: String,
}

// =============================================================================
// Sell Request Models
// =============================================================================

/// State of a purchase offer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SellRequestStatus {
    /// Awaiting a decision from the agent.
    #[default]
    Pending,
    /// Accepted by the agent.
    Accepted,
    /// Rejected by the agent.
    Rejected,
}

/// A purchase offer made by a user against a listing.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct SellRequest {
    /// Unique identifier (UUID).
    pub id: String,
    /// The property the offer targets.
    pub property_id: String,
    /// Title of the property, denormalized for display.
    pub property_title: String,
    /// Location of the property, denormalized for display.
    pub location: String,
    /// Email of the offering buyer.
    pub buyer_email: String,
    /// Display name of the offering buyer.
    pub buyer_name: String,
    /// Email of the listing agent the offer is routed to.
    pub agent_email: String,
    /// Offered amount.
    pub offer_amount: f64,
    /// Current offer state.
    #[serde(default)]
    pub status: SellRequestStatus,
    /// When the offer was made.
    pub requested_at: DateTime<Utc>,
}

/// Request to create a purchase offer.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateSellRequest {
    /// The property the offer targets.
    pub property_id: String,
    /// Title of the property.
    pub property_title: String,
    /// Location of the property.
    pub location: String,
    /// Email of the offering buyer.
    pub buyer_email: String,
    /// Display name of the offering buyer.
    pub buyer_name: String,
    /// Email of the listing agent.
    pub agent_email: String,
    /// Offered amount.
    pub offer_amount: f64,
}

/// Request to move a purchase offer to a new state.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateSellRequestStatus {
    /// New offer state.
    pub status: SellRequestStatus,
}
