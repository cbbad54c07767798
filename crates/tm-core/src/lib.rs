pub mod documents;
pub mod error;
pub mod models;

pub use documents::{ID_FIELD, OWNER_FIELD, STATUS_FIELD, merge_set};
pub use error::{CoreError, Result};
pub use models::store_ack::{DeleteAck, InsertAck, UpdateAck, UpsertOutcome};
pub use models::task_record::TaskRecord;
pub use models::user_record::UserRecord;

#[cfg(test)]
mod tests;
