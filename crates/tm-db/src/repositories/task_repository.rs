//! Task collection: opaque documents addressed by generated id, listed by
//! the owner email carried inside the document.

use crate::Result as DbErrorResult;

use tm_core::{DeleteAck, InsertAck, TaskRecord, UpdateAck, merge_set};

use serde_json::{Map, Value};
use sqlx::SqlitePool;
use uuid::Uuid;

pub struct TaskRepository {
    pool: SqlitePool,
}

impl TaskRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert the payload verbatim under its generated id. The payload is
    /// trusted to carry its own owner email; nothing is validated here.
    pub async fn insert(&self, record: &TaskRecord) -> DbErrorResult<InsertAck> {
        let document = Value::Object(record.document.clone()).to_string();

        sqlx::query("INSERT INTO tm_tasks (id, document) VALUES (?, ?)")
            .bind(record.id.to_string())
            .bind(document)
            .execute(&self.pool)
            .await?;

        Ok(InsertAck::new(record.id.to_string()))
    }

    pub async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<TaskRecord>> {
        let row: Option<(String, String)> =
            sqlx::query_as("SELECT id, document FROM tm_tasks WHERE id = ?")
                .bind(id.to_string())
                .fetch_optional(&self.pool)
                .await?;

        row.map(|(id, document)| TaskRecord::from_row(&id, &document))
            .transpose()
            .map_err(Into::into)
    }

    /// All tasks owned by `owner_email`, narrowed to one status when a
    /// filter is given. Result order follows storage order and is not part
    /// of the contract.
    pub async fn find_by_owner(
        &self,
        owner_email: &str,
        status: Option<&str>,
    ) -> DbErrorResult<Vec<TaskRecord>> {
        let rows: Vec<(String, String)> = match status {
            Some(status) => {
                sqlx::query_as(
                    r#"
                        SELECT id, document FROM tm_tasks
                        WHERE json_extract(document, '$.userEmail') = ?
                          AND json_extract(document, '$.taskStatus') = ?
                    "#,
                )
                .bind(owner_email)
                .bind(status)
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as(
                    r#"
                        SELECT id, document FROM tm_tasks
                        WHERE json_extract(document, '$.userEmail') = ?
                    "#,
                )
                .bind(owner_email)
                .fetch_all(&self.pool)
                .await?
            }
        };

        rows.into_iter()
            .map(|(id, document)| TaskRecord::from_row(&id, &document).map_err(Into::into))
            .collect()
    }

    /// Shallow field-level merge into the stored document. Concurrent merges
    /// to the same record race with last-write-wins semantics.
    pub async fn merge_update(
        &self,
        id: Uuid,
        patch: Map<String, Value>,
    ) -> DbErrorResult<UpdateAck> {
        let Some(mut record) = self.find_by_id(id).await? else {
            return Ok(UpdateAck::new(0, 0));
        };

        if !merge_set(&mut record.document, patch) {
            return Ok(UpdateAck::new(1, 0));
        }

        sqlx::query("UPDATE tm_tasks SET document = ? WHERE id = ?")
            .bind(Value::Object(record.document).to_string())
            .bind(id.to_string())
            .execute(&self.pool)
            .await?;

        Ok(UpdateAck::new(1, 1))
    }

    pub async fn delete(&self, id: Uuid) -> DbErrorResult<DeleteAck> {
        let result = sqlx::query("DELETE FROM tm_tasks WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await?;

        Ok(DeleteAck::new(result.rows_affected()))
    }
}
