//! API server configuration.

use estia_core::auth::token::{DEFAULT_TOKEN_TTL_SECS, resolve_jwt_secret};

/// Configuration for the API server.
#[derive(Clone, Debug)]
pub struct ApiConfig {
    /// Address to bind the HTTP listener (e.g. "127.0.0.1:3200").
    pub bind_addr: String,
    /// PostgreSQL connection URL.
    pub database_url: String,
    /// Token signing secret.
    pub jwt_secret: String,
    /// Token lifetime in seconds.
    pub token_ttl_secs: i64,
    /// Directory rental images are written to.
    pub image_dir: String,
    /// Public URL prefix the stored images are served under.
    pub image_base_url: String,
}

impl ApiConfig {
    /// Reads configuration from environment variables with sensible defaults.
    ///
    /// | Variable           | Default                              |
    /// |--------------------|--------------------------------------|
    /// | `BIND_ADDR`        | `127.0.0.1:3200`                     |
    /// | `DATABASE_URL`     | `postgres://localhost:5432/estia`    |
    /// | `JWT_SECRET` / `AUTH_SECRET` | generated & persisted to file |
    /// | `TOKEN_TTL_SECS`   | `3600`                               |
    /// | `IMAGE_DIR`        | `./images`                           |
    /// | `IMAGE_BASE_URL`   | `http://localhost:3200/images/`      |
    pub fn from_env() -> Self {
        Self {
            bind_addr: std::env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:3200".into()),
            database_url: std::env::var("DATABASE_URL")
                .unwrap_or_else(|_| "postgres://localhost:5432/estia".into()),
            jwt_secret: resolve_jwt_secret(),
            token_ttl_secs: std::env::var("TOKEN_TTL_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_TOKEN_TTL_SECS),
            image_dir: std::env::var("IMAGE_DIR").unwrap_or_else(|_| "./images".into()),
            image_base_url: std::env::var("IMAGE_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:3200/images/".into()),
        }
    }
}
