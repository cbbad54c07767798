//! User profile record, keyed by email.

use crate::error::{CoreError, Result as CoreErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;
use serde_json::{Map, Value};

/// One profile document per email. The profile payload is caller-defined;
/// the record key is seeded into the document so a lookup always carries its
/// email, with payload fields winning on collision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    pub email: String,
    pub document: Map<String, Value>,
}

impl UserRecord {
    /// Build the document to insert for a first-time profile: the email key
    /// first, then the payload fields on top.
    pub fn new<S: Into<String>>(email: S, profile: Map<String, Value>) -> Self {
        let email = email.into();

        let mut document = Map::new();
        document.insert(String::from("email"), Value::String(email.clone()));
        for (field, value) in profile {
            document.insert(field, value);
        }

        Self { email, document }
    }

    /// Rebuild a record from its stored columns.
    #[track_caller]
    pub fn from_row(email: &str, document: &str) -> CoreErrorResult<Self> {
        let document: Map<String, Value> =
            serde_json::from_str(document).map_err(|e| CoreError::InvalidDocument {
                message: format!("profile {} holds malformed JSON: {}", email, e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        Ok(Self {
            email: email.to_string(),
            document,
        })
    }
}
