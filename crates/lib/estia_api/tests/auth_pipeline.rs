//! Authentication pipeline tests.
//!
//! These drive the full router with a lazily-connected pool: protected
//! routes must be rejected before any handler or database work happens,
//! and public routes must be reachable anonymously.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use estia_api::config::ApiConfig;
use estia_api::{AppState, router};
use tower::ServiceExt;

const JWT_SECRET: &str = "pipeline-test-secret-0123456789abcdef";

fn test_config() -> ApiConfig {
    ApiConfig {
        bind_addr: "127.0.0.1:0".into(),
        database_url: "postgres://localhost:1/unreachable".into(),
        jwt_secret: JWT_SECRET.into(),
        token_ttl_secs: 3600,
        image_dir: std::env::temp_dir()
            .join("estia-pipeline-test-images")
            .to_string_lossy()
            .into_owned(),
        image_base_url: "http://localhost:3200/images/".into(),
    }
}

fn test_app() -> Router {
    // connect_lazy opens no connection until a query actually runs; the
    // pipeline must reject or pass through before that point.
    let pool = sqlx::postgres::PgPoolOptions::new()
        .connect_lazy("postgres://localhost:1/unreachable")
        .expect("lazy pool");
    router(AppState::new(pool, test_config()))
}

async fn body_json(resp: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("parse JSON")
}

#[tokio::test]
async fn protected_route_without_credentials_is_rejected() {
    let resp = test_app()
        .oneshot(
            Request::builder()
                .uri("/api/rentals")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(StatusCode::UNAUTHORIZED, resp.status());
    let json = body_json(resp).await;
    assert_eq!("unauthorized", json["error"]);
}

#[tokio::test]
async fn wrong_scheme_is_rejected() {
    let resp = test_app()
        .oneshot(
            Request::builder()
                .uri("/api/auth/me")
                .header(header::AUTHORIZATION, "Basic dXNlcjpwdw==")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(StatusCode::UNAUTHORIZED, resp.status());
}

#[tokio::test]
async fn garbage_token_gets_a_generic_rejection() {
    let resp = test_app()
        .oneshot(
            Request::builder()
                .uri("/api/rentals")
                .header(header::AUTHORIZATION, "Bearer not-a-token")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(StatusCode::UNAUTHORIZED, resp.status());
    let json = body_json(resp).await;
    assert_eq!("Invalid or expired token", json["message"]);
}

#[tokio::test]
async fn db_failure_during_identity_lookup_is_a_generic_401() {
    // A validly signed token whose subject lookup fails because the
    // database is unreachable: the client still sees a 401, not a 500.
    let tokens =
        estia_core::auth::token::TokenService::new(JWT_SECRET.as_bytes(), 3600, "estia");
    let token = tokens.issue("ghost@example.com").unwrap();

    let resp = test_app()
        .oneshot(
            Request::builder()
                .uri("/api/auth/me")
                .header(header::AUTHORIZATION, format!("Bearer {token}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(StatusCode::UNAUTHORIZED, resp.status());
    let json = body_json(resp).await;
    assert_eq!("unauthorized", json["error"]);
    assert_eq!("Invalid or expired token", json["message"]);
}

#[tokio::test]
async fn public_health_route_is_reachable_anonymously() {
    let resp = test_app()
        .oneshot(
            Request::builder()
                .uri("/api/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(StatusCode::OK, resp.status());
    let json = body_json(resp).await;
    assert_eq!("ok", json["status"]);
    assert_eq!(false, json["db_connected"]);
}

#[tokio::test]
async fn openapi_document_is_public() {
    let resp = test_app()
        .oneshot(
            Request::builder()
                .uri("/api-docs/openapi.json")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(StatusCode::OK, resp.status());
    let json = body_json(resp).await;
    assert_eq!("3.0.3", json["openapi"]);
}

#[tokio::test]
async fn register_with_empty_field_is_a_validation_error() {
    // Field presence and non-emptiness are checked before any database
    // work, so this runs to a 400 without a reachable database.
    let body = serde_json::json!({"name": "", "email": "a@a.com", "password": "p1"});

    let resp = test_app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/auth/register")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(StatusCode::BAD_REQUEST, resp.status());
    let json = body_json(resp).await;
    assert_eq!("validation_error", json["error"]);
}

#[tokio::test]
async fn register_with_missing_field_is_a_validation_error() {
    let body = serde_json::json!({"email": "a@a.com", "password": "p1"});

    let resp = test_app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/auth/register")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(StatusCode::BAD_REQUEST, resp.status());
}
