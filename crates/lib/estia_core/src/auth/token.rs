//! Bearer token issuance and verification.
//!
//! Tokens are compact HS256 JWS strings carrying `{sub, iat, exp, iss}`.
//! They are stateless: nothing is persisted and nothing is revoked. A token
//! simply stops verifying the instant its expiry elapses.

use std::path::PathBuf;

use chrono::{Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use rand::distr::Alphanumeric;
use rand::{Rng, rng};
use thiserror::Error;
use tracing::info;

use super::AuthError;
use crate::models::auth::TokenClaims;

/// Default access token lifetime: 1 hour.
pub const DEFAULT_TOKEN_TTL_SECS: i64 = 60 * 60;

/// Issuer claim stamped into every token.
pub const TOKEN_ISSUER: &str = "estia";

/// Why a token failed verification.
///
/// The kinds are distinct operational signals: `InvalidSignature` means
/// tampering or a key mismatch, while `Expired` is the normal end of a
/// token's life.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TokenError {
    #[error("malformed token")]
    Malformed,

    #[error("invalid token signature")]
    InvalidSignature,

    #[error("token expired")]
    Expired,
}

/// Issues and verifies signed bearer tokens.
///
/// Key material is loaded once at startup and shared read-only across all
/// request handlers. Keys are held behind this service rather than passed
/// around raw so a key-id based lookup can be added without touching call
/// sites.
#[derive(Clone)]
pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl: Duration,
    issuer: String,
}

impl TokenService {
    /// Create a service signing with `secret`, issuing tokens valid for
    /// `ttl_secs` seconds.
    pub fn new(secret: &[u8], ttl_secs: i64, issuer: &str) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            ttl: Duration::seconds(ttl_secs),
            issuer: issuer.to_string(),
        }
    }

    /// Issue a token for `subject`, valid from now until now plus the TTL.
    pub fn issue(&self, subject: &str) -> Result<String, AuthError> {
        let now = Utc::now();
        let claims = TokenClaims {
            sub: subject.to_string(),
            iat: now.timestamp(),
            exp: (now + self.ttl).timestamp(),
            iss: self.issuer.clone(),
        };
        encode(&Header::default(), &claims, &self.encoding)
            .map_err(|e| AuthError::Internal(format!("token encode: {e}")))
    }

    /// Verify `token` and return its claims.
    ///
    /// Expiry is checked with zero leeway: a token is invalid the instant
    /// its `exp` timestamp elapses.
    pub fn verify(&self, token: &str) -> Result<TokenClaims, TokenError> {
        let mut validation = Validation::default();
        validation.leeway = 0;
        decode::<TokenClaims>(token, &self.decoding, &validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => TokenError::Expired,
                ErrorKind::InvalidSignature => TokenError::InvalidSignature,
                _ => TokenError::Malformed,
            })
    }
}

/// Resolve the token signing secret: env var `JWT_SECRET`, else
/// `AUTH_SECRET`, else a random secret generated once and persisted.
pub fn resolve_jwt_secret() -> String {
    if let Ok(secret) = std::env::var("JWT_SECRET")
        && !secret.is_empty()
    {
        return secret;
    }
    if let Ok(secret) = std::env::var("AUTH_SECRET")
        && !secret.is_empty()
    {
        return secret;
    }
    // Generate and persist
    let secret_path = jwt_secret_path();
    if let Ok(existing) = std::fs::read_to_string(&secret_path) {
        let trimmed = existing.trim();
        if !trimmed.is_empty() {
            return trimmed.to_string();
        }
    }
    let secret: String = rng()
        .sample_iter(&Alphanumeric)
        .take(64)
        .map(char::from)
        .collect();
    if let Some(parent) = secret_path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }
    let _ = std::fs::write(&secret_path, &secret);
    info!(path = %secret_path.display(), "generated new JWT secret");
    secret
}

/// Path to the persisted signing secret file.
fn jwt_secret_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("estia")
        .join("jwt-secret")
}
