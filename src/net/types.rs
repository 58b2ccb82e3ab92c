//! Wire DTOs for the `/api/v1` REST boundary.
//!
//! DESIGN
//! ======
//! Field names mirror the server's camelCase payloads so serde round-trips
//! stay lossless; parsing tolerates unknown role values rather than failing
//! the whole profile fetch.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Server-assigned account role controlling admin-area access.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Customer,
    Staff,
    Admin,
    /// Unauthenticated or unrecognized role; never grants elevated access.
    /// Serde requires the catch-all variant to come last.
    #[default]
    #[serde(other)]
    Guest,
}

impl Role {
    /// Whether this role may enter the admin area.
    pub fn is_staff(self) -> bool {
        matches!(self, Role::Staff | Role::Admin)
    }
}

/// An authenticated user as returned by `GET /api/v1/client/user/profile`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique user identifier (UUID string).
    pub id: String,
    /// Login email address.
    pub email: String,
    /// Display name.
    pub full_name: String,
    /// Avatar image URL, if set.
    #[serde(default)]
    pub avatar: Option<String>,
    /// Account role.
    #[serde(default)]
    pub role: Role,
}

/// Successful `POST /api/v1/auth/sign-in` payload.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignInResponse {
    /// Bearer credential for subsequent authenticated requests.
    pub access_token: String,
}

/// Generic acknowledgement payload (`sign-up`, password flows, etc.).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: Option<String>,
}

/// A dish summary for the public menu and product-detail pages.
///
/// Field names mirror the server's `dishId`/`dishName`/`thumbImage` payload;
/// the product-detail route is addressed by `dish_id`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dish {
    /// Unique dish identifier (UUID string).
    pub dish_id: String,
    /// Display name.
    pub dish_name: String,
    /// Price in the store currency.
    pub price: f64,
    /// Discounted price, if the dish is on offer.
    #[serde(default)]
    pub offer_price: Option<f64>,
    /// Thumbnail image URL, if set.
    #[serde(default)]
    pub thumb_image: Option<String>,
}
