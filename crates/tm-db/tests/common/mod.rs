#![allow(dead_code)]

use serde_json::{Map, Value, json};
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

/// Creates an in-memory SQLite pool with migrations run
pub async fn create_test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1) // In-memory needs single connection
        .connect_with(options)
        .await
        .expect("Failed to create test pool");

    tm_db::MIGRATOR
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

pub fn object(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        other => panic!("expected JSON object, got {}", other),
    }
}

/// A representative task payload, the way the frontend submits one
pub fn task_payload(owner: &str, status: &str, title: &str) -> Map<String, Value> {
    object(json!({
        "userEmail": owner,
        "taskStatus": status,
        "title": title,
        "priority": "medium",
        "deadline": "2026-09-01",
    }))
}

pub fn profile_payload(name: &str) -> Map<String, Value> {
    object(json!({
        "name": name,
        "photoUrl": format!("https://example.com/{}.png", name),
    }))
}
