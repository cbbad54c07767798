pub mod api;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;
pub mod state;

#[cfg(test)]
mod tests;

pub use api::{
    auth::{
        auth::{issue_access_token, logout},
        token_ack::TokenAck,
    },
    error::ApiError,
    error::Result as ApiResult,
    extractors::identity::{Identity, require_identity_match},
    tasks::{
        list_tasks_query::ListTasksQuery,
        tasks::{create_task, delete_task, get_task, list_tasks, update_task},
    },
    users::users::{get_profile, upsert_profile},
};

pub use crate::routes::build_router;
pub use crate::state::{AppState, CookieSettings};
