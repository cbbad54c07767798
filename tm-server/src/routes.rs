use crate::state::AppState;
use crate::{
    create_task, delete_task, get_profile, get_task, health, issue_access_token, list_tasks,
    logout, update_task, upsert_profile,
};

use axum::{
    Router,
    http::Method,
    http::header::CONTENT_TYPE,
    routing::{delete, get, patch, post, put},
};
use tower_http::cors::{AllowOrigin, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    // Credentials mode: the access token rides in a cookie, so origins are
    // an explicit allow-list (a wildcard would be rejected by the browser).
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list(state.allowed_origins.iter().cloned()))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
        ])
        .allow_headers([CONTENT_TYPE])
        .allow_credentials(true);

    let api = Router::new()
        // Token service
        .route("/auth/access-token", post(issue_access_token))
        .route("/logout", get(logout))
        // User collection
        .route("/create-or-update-user/{email}", put(upsert_profile))
        .route("/get-user-data/{email}", get(get_profile))
        // Task collection
        .route("/add-new-task", post(create_task))
        .route("/all-tasks/{email}", get(list_tasks))
        .route("/delete-task/{id}", delete(delete_task))
        .route("/update-task-data/{id}", patch(update_task))
        .route("/task-data/{id}", get(get_task));

    Router::new()
        .nest("/my-task/api/v1", api)
        // Liveness check
        .route("/", get(health::liveness))
        .with_state(state)
        .layer(cors)
}
