//! Authentication middleware: bearer token extraction, verification, and
//! identity propagation.

use axum::extract::{Request, State};
use axum::http::header::AUTHORIZATION;
use axum::middleware::Next;
use axum::response::Response;
use tracing::warn;

use crate::AppState;
use crate::error::ApiError;
use crate::policy;
use estia_core::auth::queries;
use estia_core::models::auth::User;

/// The authenticated caller, inserted into request extensions once the
/// bearer token has been verified and its subject resolved.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

/// Fixed message for every failed authentication attempt. Callers are not
/// told whether the token was malformed, tampered with, or expired.
const AUTH_FAILED: &str = "Invalid or expired token";

/// Runs once per request, before any handler.
///
/// Public paths pass through untouched. Protected paths require an
/// `Authorization: Bearer <token>` header whose token verifies and whose
/// subject still resolves to a user row; on success the user is made
/// available to handlers as a [`CurrentUser`] extension. No extension is
/// inserted on any rejection path.
pub async fn authenticate(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    if policy::is_public(request.uri().path()) {
        return Ok(next.run(request).await);
    }

    let header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| ApiError::Unauthorized("Authentication required".into()))?;

    let token = header
        .strip_prefix("Bearer ")
        .ok_or_else(|| ApiError::Unauthorized("Authentication required".into()))?;

    let claims = state.tokens.verify(token).map_err(|e| {
        warn!(kind = %e, "token verification failed");
        ApiError::Unauthorized(AUTH_FAILED.into())
    })?;

    // The subject must still exist: a token can outlive its account. A
    // database failure here is also reported as an authentication failure,
    // never as a raw internal error.
    let record = queries::find_user_by_email(&state.pool, &claims.sub)
        .await
        .map_err(|e| {
            warn!(error = %e, "identity lookup failed");
            ApiError::Unauthorized(AUTH_FAILED.into())
        })?
        .ok_or_else(|| ApiError::Unauthorized(AUTH_FAILED.into()))?;

    request.extensions_mut().insert(CurrentUser(record.user));

    Ok(next.run(request).await)
}
