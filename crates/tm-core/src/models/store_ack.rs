//! Store acknowledgement payloads returned to API callers.
//!
//! Field names follow the document-store result objects the frontend already
//! consumes (`insertedId`, `matchedCount`, ...), so they serialize camelCase.

use serde::{Deserialize, Serialize};

/// Acknowledgement for a successful insert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertAck {
    pub acknowledged: bool,
    pub inserted_id: String,
}

impl InsertAck {
    pub fn new<S: Into<String>>(inserted_id: S) -> Self {
        Self {
            acknowledged: true,
            inserted_id: inserted_id.into(),
        }
    }
}

/// Acknowledgement for an update: `matched_count` is 0 or 1 (id lookup),
/// `modified_count` stays 0 when the patch restated the stored values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAck {
    pub acknowledged: bool,
    pub matched_count: u64,
    pub modified_count: u64,
}

impl UpdateAck {
    pub fn new(matched_count: u64, modified_count: u64) -> Self {
        Self {
            acknowledged: true,
            matched_count,
            modified_count,
        }
    }
}

/// Acknowledgement for a delete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteAck {
    pub acknowledged: bool,
    pub deleted_count: u64,
}

impl DeleteAck {
    pub fn new(deleted_count: u64) -> Self {
        Self {
            acknowledged: true,
            deleted_count,
        }
    }
}

/// Outcome of the insert-only profile upsert.
///
/// An existing record is never overwritten: the caller gets the
/// `AlreadyExists` sentinel and the stored document stays as it was.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UpsertOutcome {
    Inserted(InsertAck),
    AlreadyExists { acknowledged: bool, message: String },
}

impl UpsertOutcome {
    pub fn already_exists() -> Self {
        Self::AlreadyExists {
            acknowledged: false,
            message: String::from("user already exists"),
        }
    }
}
