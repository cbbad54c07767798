//! REST API error types
//!
//! The wire taxonomy the frontend depends on:
//! authentication failures are 401, authorization failures are 403 (both
//! `{"message", "code"}`), and store failures come back in-band as an OK
//! response whose body carries `{"error": true, "message"}`.

use tm_auth::AuthError;
use tm_db::DbError;

use std::panic::Location;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

/// Body for 401/403 responses
#[derive(Debug, Serialize)]
pub struct AccessErrorBody {
    pub message: &'static str,
    pub code: u16,
}

/// Body for in-band store failure responses
#[derive(Debug, Serialize)]
pub struct StorageErrorBody {
    pub error: bool,
    pub message: String,
}

#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing or unverifiable credential (401)
    #[error("Unauthorized: {message} {location}")]
    Unauthorized {
        message: String,
        location: ErrorLocation,
    },

    /// Credential subject does not match the addressed identity (403)
    #[error("Forbidden {location}")]
    Forbidden { location: ErrorLocation },

    /// Underlying store failure, surfaced with the raw message string
    #[error("Storage failure: {message} {location}")]
    Storage {
        message: String,
        location: ErrorLocation,
    },
}

impl ApiError {
    #[track_caller]
    pub fn unauthorized<S: Into<String>>(message: S) -> Self {
        ApiError::Unauthorized {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn forbidden() -> Self {
        ApiError::Forbidden {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn storage<S: Into<String>>(message: S) -> Self {
        ApiError::Storage {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Log the error with location for debugging; response bodies carry
        // the fixed client-facing strings only.
        log::error!("{}", self);

        match self {
            ApiError::Unauthorized { .. } => (
                StatusCode::UNAUTHORIZED,
                Json(AccessErrorBody {
                    message: "UnAuthorized Access",
                    code: 401,
                }),
            )
                .into_response(),
            ApiError::Forbidden { .. } => (
                StatusCode::FORBIDDEN,
                Json(AccessErrorBody {
                    message: "Forbidden Access",
                    code: 403,
                }),
            )
                .into_response(),
            // Store failures stay in-band: OK status, error flag in the body.
            ApiError::Storage { message, .. } => (
                StatusCode::OK,
                Json(StorageErrorBody {
                    error: true,
                    message,
                }),
            )
                .into_response(),
        }
    }
}

/// Convert database errors to API errors, keeping the raw message string
impl From<DbError> for ApiError {
    #[track_caller]
    fn from(e: DbError) -> Self {
        ApiError::Storage {
            message: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Convert auth errors to API errors (always an authentication failure)
impl From<AuthError> for ApiError {
    #[track_caller]
    fn from(e: AuthError) -> Self {
        ApiError::Unauthorized {
            message: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Malformed record ids take the storage-failure path, like any other store
/// lookup the handler cannot complete
impl From<uuid::Error> for ApiError {
    #[track_caller]
    fn from(e: uuid::Error) -> Self {
        ApiError::Storage {
            message: format!("Invalid record id: {}", e),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
