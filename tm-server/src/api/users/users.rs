//! User profile REST API handlers
//!
//! Both endpoints are identity-scoped: the credential subject must match the
//! email in the path.

use crate::state::AppState;
use crate::{ApiResult, Identity, require_identity_match};

use tm_core::{UpsertOutcome, UserRecord};
use tm_db::UserRepository;

use axum::{
    Json,
    extract::{Path, State},
};
use serde_json::{Map, Value};

/// PUT /my-task/api/v1/create-or-update-user/{email}
///
/// Store a profile on registration or first social login. Insert-only: when
/// a record already exists it is left untouched and the caller gets the
/// already-exists sentinel instead of a merge.
pub async fn upsert_profile(
    State(state): State<AppState>,
    Identity(claims): Identity,
    Path(email): Path<String>,
    Json(payload): Json<Map<String, Value>>,
) -> ApiResult<Json<UpsertOutcome>> {
    require_identity_match(&claims, &email)?;

    let repo = UserRepository::new(state.pool.clone());

    if repo.find_by_email(&email).await?.is_some() {
        log::debug!("Profile for {} already exists, keeping stored record", email);
        return Ok(Json(UpsertOutcome::already_exists()));
    }

    let record = UserRecord::new(email, payload);
    let ack = repo.insert(&record).await?;
    log::info!("Created profile for {}", record.email);

    Ok(Json(UpsertOutcome::Inserted(ack)))
}

/// GET /my-task/api/v1/get-user-data/{email}
///
/// An absent profile is an empty success, never an error.
pub async fn get_profile(
    State(state): State<AppState>,
    Identity(claims): Identity,
    Path(email): Path<String>,
) -> ApiResult<Json<Option<Map<String, Value>>>> {
    require_identity_match(&claims, &email)?;

    let repo = UserRepository::new(state.pool.clone());
    let record = repo.find_by_email(&email).await?;

    Ok(Json(record.map(|r| r.document)))
}
