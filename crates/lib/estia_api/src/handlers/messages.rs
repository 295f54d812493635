//! Message request handlers.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use crate::AppState;
use crate::error::{ApiError, ApiResult};
use crate::models::{MessageResponse, SendMessageRequest};
use crate::services::messages;

/// `POST /api/messages` - send a message to a rental owner.
pub async fn send_message_handler(
    State(state): State<AppState>,
    Json(body): Json<SendMessageRequest>,
) -> ApiResult<(StatusCode, Json<MessageResponse>)> {
    let (Some(user_id), Some(rental_id), Some(message)) =
        (body.user_id, body.rental_id, body.message)
    else {
        return Err(ApiError::Validation("Verify your input Data".into()));
    };

    let resp = messages::send(&state.pool, user_id, rental_id, &message).await?;
    Ok((StatusCode::CREATED, Json(resp)))
}
