//! Request and response shapes for the HTTP surface.

use estia_core::models::auth::User;
use estia_core::models::rental::Rental;
use serde::{Deserialize, Serialize};

/// `POST /api/auth/register` body.
///
/// Fields are optional at the wire level so a missing field surfaces as a
/// 400 validation error instead of a deserialization rejection.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

/// `POST /api/auth/login` body.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Issued bearer token.
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenResponse {
    pub token: String,
}

/// Public user profile.
#[derive(Debug, Serialize, Deserialize)]
pub struct ProfileResponse {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<User> for ProfileResponse {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            name: u.name,
            email: u.email,
            created_at: u.created_at.to_rfc3339(),
            updated_at: u.updated_at.to_rfc3339(),
        }
    }
}

/// A rental listing.
#[derive(Debug, Serialize, Deserialize)]
pub struct RentalResponse {
    pub id: i32,
    pub name: String,
    pub surface: f64,
    pub price: f64,
    pub picture: String,
    pub description: String,
    pub owner_id: i32,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Rental> for RentalResponse {
    fn from(r: Rental) -> Self {
        Self {
            id: r.id,
            name: r.name,
            surface: r.surface,
            price: r.price,
            picture: r.picture,
            description: r.description,
            owner_id: r.owner_id,
            created_at: r.created_at.to_rfc3339(),
            updated_at: r.updated_at.to_rfc3339(),
        }
    }
}

/// `GET /api/rentals` response.
#[derive(Debug, Serialize, Deserialize)]
pub struct RentalsResponse {
    pub rentals: Vec<RentalResponse>,
}

/// `POST /api/messages` body.
#[derive(Debug, Deserialize)]
pub struct SendMessageRequest {
    pub message: Option<String>,
    pub user_id: Option<i32>,
    pub rental_id: Option<i32>,
}

/// Generic confirmation body.
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// `GET /api/health` response.
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub db_connected: bool,
}
