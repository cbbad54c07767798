//! Task REST API handlers
//!
//! Listing is identity-scoped; the by-id operations (get/update/delete) are
//! authenticated but not owner-checked - any valid credential can address
//! any task id.

use crate::state::AppState;
use crate::{ApiResult, Identity, ListTasksQuery, require_identity_match};

use tm_core::{DeleteAck, InsertAck, TaskRecord, UpdateAck};
use tm_db::TaskRepository;

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde_json::{Map, Value};
use uuid::Uuid;

/// POST /my-task/api/v1/add-new-task
///
/// The payload is stored verbatim and trusted to name its own owner email.
pub async fn create_task(
    State(state): State<AppState>,
    Identity(_claims): Identity,
    Json(payload): Json<Map<String, Value>>,
) -> ApiResult<Json<InsertAck>> {
    let record = TaskRecord::new(payload);

    let repo = TaskRepository::new(state.pool.clone());
    let ack = repo.insert(&record).await?;
    log::info!("Created task {}", record.id);

    Ok(Json(ack))
}

/// GET /my-task/api/v1/all-tasks/{email}?taskStatus=
///
/// All tasks owned by the addressed identity, optionally narrowed to one
/// status.
pub async fn list_tasks(
    State(state): State<AppState>,
    Identity(claims): Identity,
    Path(email): Path<String>,
    Query(query): Query<ListTasksQuery>,
) -> ApiResult<Json<Vec<Map<String, Value>>>> {
    require_identity_match(&claims, &email)?;

    let repo = TaskRepository::new(state.pool.clone());
    let tasks = repo.find_by_owner(&email, query.status_filter()).await?;

    Ok(Json(
        tasks.into_iter().map(TaskRecord::into_document).collect(),
    ))
}

/// GET /my-task/api/v1/task-data/{id}
///
/// An unknown id is an empty success, never an error.
pub async fn get_task(
    State(state): State<AppState>,
    Identity(_claims): Identity,
    Path(id): Path<String>,
) -> ApiResult<Json<Option<Map<String, Value>>>> {
    let task_id = Uuid::parse_str(&id)?;

    let repo = TaskRepository::new(state.pool.clone());
    let task = repo.find_by_id(task_id).await?;

    Ok(Json(task.map(TaskRecord::into_document)))
}

/// PATCH /my-task/api/v1/update-task-data/{id}
///
/// Shallow field-level merge: only the named fields are overwritten.
pub async fn update_task(
    State(state): State<AppState>,
    Identity(_claims): Identity,
    Path(id): Path<String>,
    Json(patch): Json<Map<String, Value>>,
) -> ApiResult<Json<UpdateAck>> {
    let task_id = Uuid::parse_str(&id)?;

    let repo = TaskRepository::new(state.pool.clone());
    let ack = repo.merge_update(task_id, patch).await?;
    log::info!(
        "Updated task {} (matched {}, modified {})",
        task_id,
        ack.matched_count,
        ack.modified_count
    );

    Ok(Json(ack))
}

/// DELETE /my-task/api/v1/delete-task/{id}
pub async fn delete_task(
    State(state): State<AppState>,
    Identity(_claims): Identity,
    Path(id): Path<String>,
) -> ApiResult<Json<DeleteAck>> {
    let task_id = Uuid::parse_str(&id)?;

    let repo = TaskRepository::new(state.pool.clone());
    let ack = repo.delete(task_id).await?;
    log::info!("Deleted task {} ({} record(s))", task_id, ack.deleted_count);

    Ok(Json(ack))
}
