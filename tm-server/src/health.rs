use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// GET / - liveness probe for the hosting platform and a quick manual check
pub async fn liveness() -> Response {
    (StatusCode::OK, "Server is Running").into_response()
}
