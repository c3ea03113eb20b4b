//! Wire DTOs for the client/backend REST boundary.
//!
//! DESIGN
//! ======
//! These types mirror the backend's response schemas field for field so serde
//! decoding stays lossless and pages never reshape payloads by hand.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// An authenticated user as returned by `/auth/register` and `/auth/me`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier.
    pub id: i64,
    /// Login name, unique across the shop.
    pub username: String,
    /// Contact email, unique across the shop.
    pub email: String,
    /// Either `"user"` or `"admin"`; assigned by the backend at registration.
    pub role: String,
}

impl User {
    /// Whether this user may create and delete sweets.
    pub fn is_admin(&self) -> bool {
        self.role == "admin"
    }
}

/// A sweet (product) as returned by the `/sweets` endpoints.
///
/// `quantity` is only ever mutated server-side; the client re-fetches after
/// every mutation instead of patching its copy.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Sweet {
    /// Unique sweet identifier.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Free-form category label.
    pub category: String,
    /// Unit price, non-negative.
    pub price: f64,
    /// Units in stock; zero means out of stock.
    pub quantity: u32,
}

/// Create payload for `POST /sweets`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewSweet {
    pub name: String,
    pub category: String,
    pub price: f64,
    pub quantity: u32,
}

/// Response body of `POST /auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenResponse {
    /// Opaque bearer token sent with every subsequent request.
    pub access_token: String,
    /// Always `"bearer"` for this backend.
    pub token_type: String,
}

/// Error body shape the backend uses for rejections.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ErrorBody {
    pub detail: String,
}
