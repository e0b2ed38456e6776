//! Driven port for the `tasks` collection.

use async_trait::async_trait;

use crate::domain::{Task, TaskId, TaskPatch};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by task repository adapters.
    pub enum TaskPersistenceError {
        /// Repository connection could not be established.
        Connection { message: String } => "task repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "task repository query failed: {message}",
    }
}

/// Storage of task documents.
///
/// Writes are last-write-wins; adapters add no locking of their own.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Every task, newest `created_at` first.
    async fn list_newest_first(&self) -> Result<Vec<Task>, TaskPersistenceError>;

    /// Store a freshly created task.
    async fn insert(&self, task: &Task) -> Result<(), TaskPersistenceError>;

    /// Shallow-merge `patch` into the stored task. Returns `false` when no
    /// task has the id.
    async fn update(&self, id: &TaskId, patch: &TaskPatch) -> Result<bool, TaskPersistenceError>;

    /// Remove the task. Returns `false` when no task has the id.
    async fn delete(&self, id: &TaskId) -> Result<bool, TaskPersistenceError>;
}
