//! Authentication request handlers.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use crate::AppState;
use crate::error::{ApiError, ApiResult};
use crate::middleware::auth::CurrentUser;
use crate::models::{LoginRequest, ProfileResponse, RegisterRequest, TokenResponse};
use crate::services::auth;

/// `POST /api/auth/register` - create a new account.
pub async fn register_handler(
    State(state): State<AppState>,
    Json(body): Json<RegisterRequest>,
) -> ApiResult<(StatusCode, Json<TokenResponse>)> {
    let (Some(name), Some(email), Some(password)) = (body.name, body.email, body.password) else {
        return Err(ApiError::Validation(
            "name, email and password are required".into(),
        ));
    };

    let resp = auth::register(&state.pool, &state.tokens, &name, &email, &password).await?;
    Ok((StatusCode::CREATED, Json(resp)))
}

/// `POST /api/auth/login` - authenticate with email and password.
pub async fn login_handler(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> ApiResult<Json<TokenResponse>> {
    let (Some(email), Some(password)) = (body.email, body.password) else {
        return Err(ApiError::Unauthorized("Invalid credentials".into()));
    };

    let resp = auth::login(&state.pool, &state.tokens, &email, &password).await?;
    Ok(Json(resp))
}

/// `GET /api/auth/me` - the authenticated caller's profile.
pub async fn me_handler(
    axum::Extension(user): axum::Extension<CurrentUser>,
) -> Json<ProfileResponse> {
    Json(ProfileResponse::from(user.0))
}
