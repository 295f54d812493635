//! # estia_api
//!
//! HTTP API library for Estia.

pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod policy;
pub mod routes;
pub mod services;

use axum::Router;
use axum::routing::{get, post};
use estia_core::auth::token::{TOKEN_ISSUER, TokenService};
use estia_core::storage::ImageStore;
use sqlx::PgPool;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

use crate::config::ApiConfig;
use crate::handlers::{auth, docs, health, messages, rentals, users};

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// PostgreSQL connection pool.
    pub pool: PgPool,
    /// API configuration.
    pub config: ApiConfig,
    /// Token issuance and verification.
    pub tokens: TokenService,
    /// Rental image storage.
    pub images: ImageStore,
}

impl AppState {
    /// Build application state from a pool and configuration.
    pub fn new(pool: PgPool, config: ApiConfig) -> Self {
        let tokens = TokenService::new(
            config.jwt_secret.as_bytes(),
            config.token_ttl_secs,
            TOKEN_ISSUER,
        );
        let images = ImageStore::new(&config.image_dir, &config.image_base_url);
        Self {
            pool,
            config,
            tokens,
            images,
        }
    }
}

/// Run embedded database migrations.
///
/// Delegates to `estia_core::migrate::migrate()` which owns the migration
/// files.
pub async fn migrate(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    estia_core::migrate::migrate(pool).await
}

/// Builds the Axum router with all routes and shared state.
///
/// Every route goes through the authentication middleware; the paths the
/// policy table lists as public pass it anonymously.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(routes::AUTH_REGISTER, post(auth::register_handler))
        .route(routes::AUTH_LOGIN, post(auth::login_handler))
        .route(routes::AUTH_ME, get(auth::me_handler))
        .route(routes::USER_BY_ID, get(users::get_user_handler))
        .route(
            routes::RENTALS,
            get(rentals::list_rentals_handler).post(rentals::create_rental_handler),
        )
        .route(
            routes::RENTAL_BY_ID,
            get(rentals::get_rental_handler).put(rentals::update_rental_handler),
        )
        .route(routes::MESSAGES, post(messages::send_message_handler))
        .route(routes::HEALTH, get(health::health_handler))
        .route(routes::OPENAPI, get(docs::openapi_handler))
        .nest_service("/images", ServeDir::new(state.images.dir()))
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            middleware::auth::authenticate,
        ))
        .layer(cors)
        .with_state(state)
}
