use crate::ApiError;

use axum::http::StatusCode;
use axum::response::IntoResponse;
use http_body_util::BodyExt;
use serde_json::{Value, json};

async fn response_parts(error: ApiError) -> (StatusCode, Value) {
    let response = error.into_response();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_unauthorized_maps_to_401_with_fixed_body() {
    let (status, body) = response_parts(ApiError::unauthorized("token expired")).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body, json!({"message": "UnAuthorized Access", "code": 401}));
}

#[tokio::test]
async fn test_forbidden_maps_to_403_with_fixed_body() {
    let (status, body) = response_parts(ApiError::forbidden()).await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body, json!({"message": "Forbidden Access", "code": 403}));
}

#[tokio::test]
async fn test_storage_failure_stays_in_band_with_raw_message() {
    let (status, body) = response_parts(ApiError::storage("disk is on fire")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"error": true, "message": "disk is on fire"}));
}

#[tokio::test]
async fn test_invalid_uuid_takes_storage_path() {
    let parse_error = uuid::Uuid::parse_str("nope").unwrap_err();

    let (status, body) = response_parts(ApiError::from(parse_error)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["error"], json!(true));
    assert!(
        body["message"]
            .as_str()
            .unwrap()
            .starts_with("Invalid record id")
    );
}
