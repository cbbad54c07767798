#![allow(dead_code)]

//! Test infrastructure for tm-server API tests

use tm_auth::{AccessClaims, JwtValidator, TokenIssuer};
use tm_config::Environment;
use tm_server::state::{AppState, CookieSettings};

use std::sync::Arc;

use axum::body::Body;
use axum::http::{HeaderValue, Request, Response};
use http_body_util::BodyExt;
use serde_json::{Map, Value, json};
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

pub const TEST_SECRET: &[u8] = b"test-secret-key-at-least-32-bytes";
const DAY_SECS: i64 = 86_400;

/// Create a test pool with in-memory SQLite and migrations run
pub async fn create_test_pool() -> SqlitePool {
    let pool = create_unmigrated_pool().await;

    tm_db::MIGRATOR
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// A pool whose database has no tables: every store access fails loudly.
/// Used to prove the auth gate rejects before the store is touched.
pub async fn create_unmigrated_pool() -> SqlitePool {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .create_if_missing(true);

    SqlitePoolOptions::new()
        .max_connections(1) // In-memory needs single connection
        .connect_with(options)
        .await
        .expect("Failed to create test pool")
}

/// Create AppState for testing (development cookie settings)
pub async fn create_test_state() -> AppState {
    state_with_pool(create_test_pool().await)
}

pub fn state_with_pool(pool: SqlitePool) -> AppState {
    AppState {
        pool,
        token_issuer: Arc::new(TokenIssuer::with_hs256(TEST_SECRET, 10)),
        jwt_validator: Arc::new(JwtValidator::with_hs256(TEST_SECRET)),
        cookie_settings: CookieSettings::for_environment(Environment::Development),
        allowed_origins: vec![HeaderValue::from_static("http://localhost:5173")],
    }
}

/// Mint a fresh, valid access token for `email`
pub fn mint_token(email: &str) -> String {
    let issuer = TokenIssuer::with_hs256(TEST_SECRET, 10);
    let mut payload = Map::new();
    payload.insert(String::from("email"), json!(email));
    payload.insert(String::from("name"), json!("Test User"));
    issuer.issue(payload).expect("Failed to mint token")
}

/// Mint a token whose 10-day lifetime started `days` ago
pub fn mint_token_issued_days_ago(email: &str, days: i64) -> String {
    let iat = chrono::Utc::now().timestamp() - days * DAY_SECS;
    let claims = AccessClaims {
        email: Some(email.to_string()),
        exp: iat + 10 * DAY_SECS,
        iat,
        extra: Map::new(),
    };

    TokenIssuer::with_hs256(TEST_SECRET, 10)
        .issue_claims(&claims)
        .expect("Failed to mint token")
}

pub fn request(method: &str, uri: &str, token: Option<&str>, body: Option<Value>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);

    if let Some(token) = token {
        builder = builder.header("Cookie", format!("accessToken={}", token));
    }

    match body {
        Some(value) => builder
            .header("Content-Type", "application/json")
            .body(Body::from(serde_json::to_vec(&value).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

pub async fn body_json(response: Response<axum::body::Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
