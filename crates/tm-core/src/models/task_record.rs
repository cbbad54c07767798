//! Task record - a caller-defined document owned by one identity.

use crate::error::{CoreError, Result as CoreErrorResult};
use crate::documents::{ID_FIELD, OWNER_FIELD, STATUS_FIELD};

use std::panic::Location;

use error_location::ErrorLocation;
use serde_json::{Map, Value};
use uuid::Uuid;

/// A task is an opaque JSON object plus a generated identifier.
///
/// The store interprets only `userEmail` (owner) and `taskStatus` (free-form
/// status string) inside the document; everything else passes through
/// verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskRecord {
    pub id: Uuid,
    pub document: Map<String, Value>,
}

impl TaskRecord {
    /// Wrap a caller payload under a fresh identifier.
    pub fn new(document: Map<String, Value>) -> Self {
        Self {
            id: Uuid::new_v4(),
            document,
        }
    }

    /// Rebuild a record from its stored columns.
    #[track_caller]
    pub fn from_row(id: &str, document: &str) -> CoreErrorResult<Self> {
        let id = Uuid::parse_str(id).map_err(|source| CoreError::Uuid {
            source,
            location: ErrorLocation::from(Location::caller()),
        })?;

        let document: Map<String, Value> =
            serde_json::from_str(document).map_err(|e| CoreError::InvalidDocument {
                message: format!("task {} holds malformed JSON: {}", id, e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        Ok(Self { id, document })
    }

    /// The wire representation: the stored payload plus `_id`.
    pub fn into_document(self) -> Map<String, Value> {
        let mut document = self.document;
        document.insert(ID_FIELD.to_string(), Value::String(self.id.to_string()));
        document
    }

    pub fn owner_email(&self) -> Option<&str> {
        self.document.get(OWNER_FIELD).and_then(Value::as_str)
    }

    pub fn status(&self) -> Option<&str> {
        self.document.get(STATUS_FIELD).and_then(Value::as_str)
    }
}
