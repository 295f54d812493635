//! Message service.

use estia_core::auth::queries as user_queries;
use estia_core::{messages, rentals};
use sqlx::PgPool;
use tracing::info;

use crate::error::{ApiError, ApiResult};
use crate::models::MessageResponse;

/// Record a message from a user about a rental.
pub async fn send(
    pool: &PgPool,
    user_id: i32,
    rental_id: i32,
    message: &str,
) -> ApiResult<MessageResponse> {
    if message.trim().is_empty() {
        return Err(ApiError::Validation("Verify your input Data".into()));
    }
    if message.chars().count() > 2000 {
        return Err(ApiError::Validation(
            "Message must be at most 2000 characters".into(),
        ));
    }

    if rentals::get_rental(pool, rental_id).await?.is_none() {
        return Err(ApiError::NotFound("Rental not found".into()));
    }
    if user_queries::get_user_by_id(pool, user_id).await?.is_none() {
        return Err(ApiError::NotFound("User not found".into()));
    }

    messages::create_message(pool, user_id, rental_id, message).await?;

    info!(rental = rental_id, "message sent");
    Ok(MessageResponse {
        message: "Message send with success".into(),
    })
}
