//! Helpers shared by the user and task collections.
//!
//! Records are opaque JSON objects; the store only interprets the handful of
//! well-known fields named here.

use serde_json::{Map, Value};

/// Wire name of the generated task identifier.
pub const ID_FIELD: &str = "_id";
/// Document field holding the owning identity's email.
pub const OWNER_FIELD: &str = "userEmail";
/// Document field holding the caller-defined task status.
pub const STATUS_FIELD: &str = "taskStatus";

/// Shallow field-level merge: every top-level field of `patch` overwrites the
/// field of the same name in `document`; all other fields are left untouched.
///
/// Returns `true` when the merge changed the document (drives the
/// `modifiedCount` acknowledgement: a patch that restates current values
/// counts as matched but not modified).
pub fn merge_set(document: &mut Map<String, Value>, patch: Map<String, Value>) -> bool {
    let mut changed = false;
    for (field, value) in patch {
        if document.get(&field) != Some(&value) {
            changed = true;
        }
        document.insert(field, value);
    }
    changed
}
