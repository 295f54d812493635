//! Rental domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Rental listing row.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Rental {
    pub id: i32,
    pub name: String,
    pub surface: f64,
    pub price: f64,
    /// Public URL of the stored listing image.
    pub picture: String,
    pub description: String,
    pub owner_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
