//! Integration tests for the task endpoints

mod common;

use crate::common::{body_json, create_test_state, mint_token, request};

use axum::http::StatusCode;
use serde_json::{Value, json};
use tower::ServiceExt;

use tm_server::build_router;

fn task_payload(owner: &str, status: &str, title: &str) -> Value {
    json!({
        "userEmail": owner,
        "taskStatus": status,
        "title": title,
        "priority": "medium",
        "deadline": "2026-09-01",
    })
}

/// POST a task and return its generated id
async fn create_task(app: &axum::Router, token: &str, payload: Value) -> String {
    let response = app
        .clone()
        .oneshot(request(
            "POST",
            "/my-task/api/v1/add-new-task",
            Some(token),
            Some(payload),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["acknowledged"], json!(true));
    body["insertedId"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn test_create_then_fetch_returns_payload_plus_id() {
    let app = build_router(create_test_state().await);
    let token = mint_token("ada@example.com");
    let payload = task_payload("ada@example.com", "todo", "Write report");

    let id = create_task(&app, &token, payload.clone()).await;

    let response = app
        .oneshot(request(
            "GET",
            &format!("/my-task/api/v1/task-data/{}", id),
            Some(&token),
            None,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let mut expected = payload;
    expected["_id"] = json!(id);
    assert_eq!(body_json(response).await, expected);
}

#[tokio::test]
async fn test_fetch_unknown_task_is_empty_success() {
    let app = build_router(create_test_state().await);
    let token = mint_token("ada@example.com");

    let response = app
        .oneshot(request(
            "GET",
            "/my-task/api/v1/task-data/00000000-0000-0000-0000-000000000000",
            Some(&token),
            None,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, Value::Null);
}

#[tokio::test]
async fn test_malformed_task_id_reports_in_band_error() {
    let app = build_router(create_test_state().await);
    let token = mint_token("ada@example.com");

    let response = app
        .oneshot(request(
            "GET",
            "/my-task/api/v1/task-data/not-a-uuid",
            Some(&token),
            None,
        ))
        .await
        .unwrap();

    // Malformed ids take the storage-failure path: OK status, error flag
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["error"], json!(true));
}

#[tokio::test]
async fn test_list_returns_only_owned_tasks() {
    let app = build_router(create_test_state().await);
    let ada = mint_token("ada@example.com");
    let bob = mint_token("bob@example.com");

    create_task(&app, &ada, task_payload("ada@example.com", "todo", "A1")).await;
    create_task(&app, &ada, task_payload("ada@example.com", "done", "A2")).await;
    create_task(&app, &bob, task_payload("bob@example.com", "todo", "B1")).await;

    let response = app
        .oneshot(request(
            "GET",
            "/my-task/api/v1/all-tasks/ada@example.com",
            Some(&ada),
            None,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let tasks = body.as_array().unwrap();
    assert_eq!(tasks.len(), 2);
    assert!(
        tasks
            .iter()
            .all(|t| t["userEmail"] == json!("ada@example.com"))
    );
}

#[tokio::test]
async fn test_list_with_status_filter_narrows_to_matching_status() {
    let app = build_router(create_test_state().await);
    let token = mint_token("ada@example.com");

    create_task(&app, &token, task_payload("ada@example.com", "todo", "A1")).await;
    create_task(&app, &token, task_payload("ada@example.com", "done", "A2")).await;

    let response = app
        .oneshot(request(
            "GET",
            "/my-task/api/v1/all-tasks/ada@example.com?taskStatus=done",
            Some(&token),
            None,
        ))
        .await
        .unwrap();

    let body = body_json(response).await;
    let tasks = body.as_array().unwrap();
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0]["title"], json!("A2"));
}

#[tokio::test]
async fn test_list_with_empty_status_param_is_unfiltered() {
    let app = build_router(create_test_state().await);
    let token = mint_token("ada@example.com");

    create_task(&app, &token, task_payload("ada@example.com", "todo", "A1")).await;
    create_task(&app, &token, task_payload("ada@example.com", "done", "A2")).await;

    let response = app
        .oneshot(request(
            "GET",
            "/my-task/api/v1/all-tasks/ada@example.com?taskStatus=",
            Some(&token),
            None,
        ))
        .await
        .unwrap();

    let body = body_json(response).await;
    assert_eq!(body.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_update_overwrites_named_fields_only() {
    let app = build_router(create_test_state().await);
    let token = mint_token("ada@example.com");
    let payload = task_payload("ada@example.com", "todo", "Write report");

    let id = create_task(&app, &token, payload.clone()).await;

    let response = app
        .clone()
        .oneshot(request(
            "PATCH",
            &format!("/my-task/api/v1/update-task-data/{}", id),
            Some(&token),
            Some(json!({"taskStatus": "done"})),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({"acknowledged": true, "matchedCount": 1, "modifiedCount": 1})
    );

    // Every field except the patched one is byte-identical
    let fetched = app
        .oneshot(request(
            "GET",
            &format!("/my-task/api/v1/task-data/{}", id),
            Some(&token),
            None,
        ))
        .await
        .unwrap();

    let mut expected = payload;
    expected["taskStatus"] = json!("done");
    expected["_id"] = json!(id);
    assert_eq!(body_json(fetched).await, expected);
}

#[tokio::test]
async fn test_update_unknown_task_matches_nothing() {
    let app = build_router(create_test_state().await);
    let token = mint_token("ada@example.com");

    let response = app
        .oneshot(request(
            "PATCH",
            "/my-task/api/v1/update-task-data/00000000-0000-0000-0000-000000000000",
            Some(&token),
            Some(json!({"taskStatus": "done"})),
        ))
        .await
        .unwrap();

    assert_eq!(
        body_json(response).await,
        json!({"acknowledged": true, "matchedCount": 0, "modifiedCount": 0})
    );
}

#[tokio::test]
async fn test_delete_then_fetch_is_empty_success() {
    let app = build_router(create_test_state().await);
    let token = mint_token("ada@example.com");

    let id = create_task(
        &app,
        &token,
        task_payload("ada@example.com", "todo", "Write report"),
    )
    .await;

    let response = app
        .clone()
        .oneshot(request(
            "DELETE",
            &format!("/my-task/api/v1/delete-task/{}", id),
            Some(&token),
            None,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({"acknowledged": true, "deletedCount": 1})
    );

    let fetched = app
        .oneshot(request(
            "GET",
            &format!("/my-task/api/v1/task-data/{}", id),
            Some(&token),
            None,
        ))
        .await
        .unwrap();

    assert_eq!(fetched.status(), StatusCode::OK);
    assert_eq!(body_json(fetched).await, Value::Null);
}

#[tokio::test]
async fn test_by_id_operations_are_not_owner_checked() {
    // Documented authorization gap: a valid credential for any identity can
    // address any task by id.
    let app = build_router(create_test_state().await);
    let ada = mint_token("ada@example.com");
    let bob = mint_token("bob@example.com");

    let id = create_task(&app, &ada, task_payload("ada@example.com", "todo", "A1")).await;

    let response = app
        .oneshot(request(
            "GET",
            &format!("/my-task/api/v1/task-data/{}", id),
            Some(&bob),
            None,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["userEmail"], json!("ada@example.com"));
}
