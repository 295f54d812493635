//! Authentication service: registration, login, and profile flows.

use estia_core::auth::password::{hash_password, verify_password};
use estia_core::auth::queries;
use estia_core::auth::token::TokenService;
use sqlx::PgPool;
use tracing::info;

use crate::error::{ApiError, ApiResult};
use crate::models::{ProfileResponse, TokenResponse};

/// Register a new account and issue its first token.
pub async fn register(
    pool: &PgPool,
    tokens: &TokenService,
    name: &str,
    email: &str,
    password: &str,
) -> ApiResult<TokenResponse> {
    if name.trim().is_empty() || email.trim().is_empty() || password.is_empty() {
        return Err(ApiError::Validation(
            "name, email and password are required".into(),
        ));
    }

    if queries::email_exists(pool, email).await? {
        return Err(ApiError::Conflict("Email already registered".into()));
    }

    let hash = hash_password(password)?;
    let user = queries::create_user(pool, name, email, &hash).await?;
    info!(email, "user registered");

    let token = tokens.issue(&user.email)?;
    Ok(TokenResponse { token })
}

/// Authenticate with email and password.
///
/// A missing account and a wrong password produce the same error, so the
/// response cannot be used to probe which emails are registered. The
/// password is always verified before a token is issued.
pub async fn login(
    pool: &PgPool,
    tokens: &TokenService,
    email: &str,
    password: &str,
) -> ApiResult<TokenResponse> {
    let record = queries::find_user_by_email(pool, email)
        .await?
        .ok_or_else(invalid_credentials)?;

    if !verify_password(password, &record.password_hash)? {
        return Err(invalid_credentials());
    }

    info!(email, "user authenticated");
    let token = tokens.issue(&record.user.email)?;
    Ok(TokenResponse { token })
}

/// Fetch a user's public profile by id.
pub async fn profile_by_id(pool: &PgPool, id: i32) -> ApiResult<ProfileResponse> {
    let user = queries::get_user_by_id(pool, id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("User not found with id:{id}")))?;
    Ok(ProfileResponse::from(user))
}

fn invalid_credentials() -> ApiError {
    ApiError::Unauthorized("Invalid credentials".into())
}
