//! Authentication logic.
//!
//! Provides password hashing, bearer token issuance and verification, and
//! the user queries the API layer builds its flows on.

pub mod password;
pub mod queries;
pub mod token;

use thiserror::Error;

/// Authentication errors.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Database error: {0}")]
    Db(#[from] sqlx::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}
