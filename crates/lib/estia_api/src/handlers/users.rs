//! User profile request handlers.

use axum::Json;
use axum::extract::{Path, State};

use crate::AppState;
use crate::error::ApiResult;
use crate::models::ProfileResponse;
use crate::services::auth;

/// `GET /api/user/{id}` - a user's public profile.
pub async fn get_user_handler(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> ApiResult<Json<ProfileResponse>> {
    let resp = auth::profile_by_id(&state.pool, id).await?;
    Ok(Json(resp))
}
