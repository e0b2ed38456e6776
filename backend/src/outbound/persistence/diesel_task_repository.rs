//! PostgreSQL-backed `TaskRepository` over the `tasks` document table.
//!
//! Updates merge the patch into the stored JSONB with `||`, so only the
//! submitted top-level fields change and concurrent writers are last-write-wins.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::sql_types::{Jsonb, Text};
use diesel_async::RunQueryDsl;

use crate::domain::ports::{TaskPersistenceError, TaskRepository};
use crate::domain::{Task, TaskId, TaskPatch};

use super::diesel_basic_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::models::{NewTaskRow, TaskDocument, TaskRow, patch_document};
use super::pool::{DbPool, PoolError};
use super::schema::tasks;

const MERGE_PATCH_SQL: &str = "UPDATE tasks SET doc = doc || $1 WHERE id = $2";

/// Diesel-backed implementation of the `TaskRepository` port.
#[derive(Clone)]
pub struct DieselTaskRepository {
    pool: DbPool,
}

impl DieselTaskRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> TaskPersistenceError {
    map_basic_pool_error(error, TaskPersistenceError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> TaskPersistenceError {
    map_basic_diesel_error(
        error,
        TaskPersistenceError::query,
        TaskPersistenceError::connection,
    )
}

fn row_to_task(row: TaskRow) -> Result<Task, TaskPersistenceError> {
    let id = TaskId::parse(&row.id).map_err(|err| TaskPersistenceError::query(err.to_string()))?;
    let document: TaskDocument = serde_json::from_value(row.doc)
        .map_err(|err| TaskPersistenceError::query(format!("malformed task document: {err}")))?;
    Ok(document.into_task(id))
}

#[async_trait]
impl TaskRepository for DieselTaskRepository {
    async fn list_newest_first(&self) -> Result<Vec<Task>, TaskPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<TaskRow> = tasks::table
            .order(tasks::created_at.desc())
            .select(TaskRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        rows.into_iter().map(row_to_task).collect()
    }

    async fn insert(&self, task: &Task) -> Result<(), TaskPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let id = task.id().to_string();
        let doc = serde_json::to_value(TaskDocument::from_task(task))
            .map_err(|err| TaskPersistenceError::query(err.to_string()))?;
        let row = NewTaskRow {
            id: &id,
            created_at: task.created_at(),
            doc: &doc,
        };

        diesel::insert_into(tasks::table)
            .values(&row)
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(map_diesel_error)
    }

    async fn update(&self, id: &TaskId, patch: &TaskPatch) -> Result<bool, TaskPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let affected = diesel::sql_query(MERGE_PATCH_SQL)
            .bind::<Jsonb, _>(patch_document(patch))
            .bind::<Text, _>(id.to_string())
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(affected > 0)
    }

    async fn delete(&self, id: &TaskId) -> Result<bool, TaskPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let affected = diesel::delete(tasks::table.filter(tasks::id.eq(id.to_string())))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(affected > 0)
    }
}
