//! Driving port for task mutations.

use async_trait::async_trait;

use crate::domain::{Error, NewTask, Task, TaskPatch};

/// Domain use-case port for creating, updating and deleting tasks.
///
/// Identifiers arrive as raw path text; implementations reject malformed
/// ones with an `invalid_request` error before touching storage.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskCommand: Send + Sync {
    /// Persist a new task with defaults applied.
    async fn create_task(&self, input: NewTask) -> Result<Task, Error>;

    /// Shallow-merge `patch` into the task with id `id`.
    async fn update_task(&self, id: &str, patch: TaskPatch) -> Result<(), Error>;

    /// Permanently remove the task with id `id`.
    async fn delete_task(&self, id: &str) -> Result<(), Error>;
}
