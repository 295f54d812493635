//! End-to-end authentication scenarios against a real PostgreSQL.
//!
//! Ignored by default: point `DATABASE_URL` at a disposable database and
//! run `cargo test -- --ignored` to exercise them.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use estia_api::config::ApiConfig;
use estia_api::{AppState, router};
use tower::ServiceExt;

const JWT_SECRET: &str = "scenario-test-secret-0123456789abcdef";

async fn pg_app() -> Router {
    let url = std::env::var("DATABASE_URL").expect("DATABASE_URL must point at a test database");
    let pool = sqlx::PgPool::connect(&url).await.expect("connect");
    estia_api::migrate(&pool).await.expect("migrate");

    let config = ApiConfig {
        bind_addr: "127.0.0.1:0".into(),
        database_url: url,
        jwt_secret: JWT_SECRET.into(),
        token_ttl_secs: 3600,
        image_dir: std::env::temp_dir()
            .join("estia-scenario-test-images")
            .to_string_lossy()
            .into_owned(),
        image_base_url: "http://localhost:3200/images/".into(),
    };
    router(AppState::new(pool, config))
}

fn unique_email(tag: &str) -> String {
    format!("{tag}-{}@example.com", uuid::Uuid::now_v7())
}

async fn post_json(app: &Router, uri: &str, body: serde_json::Value) -> axum::response::Response {
    app.clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap()
}

async fn body_json(resp: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("parse JSON")
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL (set DATABASE_URL)"]
async fn register_then_login_then_me() {
    let app = pg_app().await;
    let email = unique_email("roundtrip");

    let resp = post_json(
        &app,
        "/api/auth/register",
        serde_json::json!({"name": "A", "email": email, "password": "p1"}),
    )
    .await;
    assert_eq!(StatusCode::CREATED, resp.status());

    let resp = post_json(
        &app,
        "/api/auth/login",
        serde_json::json!({"email": email, "password": "p1"}),
    )
    .await;
    assert_eq!(StatusCode::OK, resp.status());
    let token = body_json(resp).await["token"].as_str().unwrap().to_string();

    // The decoded subject is the registered email.
    let tokens = estia_core::auth::token::TokenService::new(JWT_SECRET.as_bytes(), 3600, "estia");
    assert_eq!(email, tokens.verify(&token).unwrap().sub);

    let resp = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/auth/me")
                .header(header::AUTHORIZATION, format!("Bearer {token}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(StatusCode::OK, resp.status());
    let profile = body_json(resp).await;
    assert_eq!(email, profile["email"]);
    assert_eq!("A", profile["name"]);
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL (set DATABASE_URL)"]
async fn duplicate_registration_conflicts_without_altering_the_first() {
    let app = pg_app().await;
    let email = unique_email("duplicate");

    let first = post_json(
        &app,
        "/api/auth/register",
        serde_json::json!({"name": "A", "email": email, "password": "p1"}),
    )
    .await;
    assert_eq!(StatusCode::CREATED, first.status());

    let second = post_json(
        &app,
        "/api/auth/register",
        serde_json::json!({"name": "B", "email": email, "password": "p2"}),
    )
    .await;
    assert_eq!(StatusCode::CONFLICT, second.status());

    // The first identity is unaltered: its password still logs in.
    let login = post_json(
        &app,
        "/api/auth/login",
        serde_json::json!({"email": email, "password": "p1"}),
    )
    .await;
    assert_eq!(StatusCode::OK, login.status());
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL (set DATABASE_URL)"]
async fn wrong_password_and_unknown_email_are_indistinguishable() {
    let app = pg_app().await;
    let email = unique_email("badlogin");

    let resp = post_json(
        &app,
        "/api/auth/register",
        serde_json::json!({"name": "A", "email": email, "password": "p1"}),
    )
    .await;
    assert_eq!(StatusCode::CREATED, resp.status());

    let wrong_password = post_json(
        &app,
        "/api/auth/login",
        serde_json::json!({"email": email, "password": "nope"}),
    )
    .await;
    let unknown_email = post_json(
        &app,
        "/api/auth/login",
        serde_json::json!({"email": unique_email("nobody"), "password": "nope"}),
    )
    .await;

    assert_eq!(StatusCode::UNAUTHORIZED, wrong_password.status());
    assert_eq!(StatusCode::UNAUTHORIZED, unknown_email.status());
    assert_eq!(
        body_json(wrong_password).await,
        body_json(unknown_email).await
    );
}
