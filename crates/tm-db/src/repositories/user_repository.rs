//! User profile collection, keyed by email.
//!
//! Profile upserts are insert-only: an existing record is never overwritten.
//! The check-then-insert split lives in the handler so the early-return
//! sentinel stays visible at the API layer.

use crate::Result as DbErrorResult;

use tm_core::{InsertAck, UserRecord};

use serde_json::Value;
use sqlx::SqlitePool;

pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn find_by_email(&self, email: &str) -> DbErrorResult<Option<UserRecord>> {
        let row: Option<(String, String)> =
            sqlx::query_as("SELECT email, document FROM tm_users WHERE email = ?")
                .bind(email)
                .fetch_optional(&self.pool)
                .await?;

        row.map(|(email, document)| UserRecord::from_row(&email, &document))
            .transpose()
            .map_err(Into::into)
    }

    pub async fn insert(&self, record: &UserRecord) -> DbErrorResult<InsertAck> {
        let document = Value::Object(record.document.clone()).to_string();

        sqlx::query("INSERT INTO tm_users (email, document) VALUES (?, ?)")
            .bind(&record.email)
            .bind(document)
            .execute(&self.pool)
            .await?;

        Ok(InsertAck::new(record.email.clone()))
    }
}
