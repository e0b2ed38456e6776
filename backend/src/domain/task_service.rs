//! Task domain service.
//!
//! Implements the task driving ports over a [`TaskRepository`], applying the
//! default-field policy on create and validating identifiers before any
//! storage call.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use tracing::debug;

use crate::domain::ports::{TaskCommand, TaskPersistenceError, TaskQuery, TaskRepository};
use crate::domain::{Error, NewTask, Task, TaskId, TaskPatch};

pub(crate) const INVALID_TASK_ID_MESSAGE: &str = "Invalid task ID";
pub(crate) const TASK_NOT_FOUND_MESSAGE: &str = "Task not found";

fn map_repository_error(error: TaskPersistenceError) -> Error {
    match error {
        TaskPersistenceError::Connection { message } => {
            Error::internal(format!("task repository unavailable: {message}"))
        }
        TaskPersistenceError::Query { message } => {
            Error::internal(format!("task repository error: {message}"))
        }
    }
}

fn parse_task_id(raw: &str) -> Result<TaskId, Error> {
    TaskId::parse(raw).map_err(|_| Error::invalid_request(INVALID_TASK_ID_MESSAGE))
}

/// Task service implementing [`TaskCommand`] and [`TaskQuery`].
#[derive(Clone)]
pub struct TaskService<R> {
    tasks: Arc<R>,
    clock: Arc<dyn Clock>,
}

impl<R> TaskService<R> {
    /// Create the service over a task repository.
    pub fn new(tasks: Arc<R>, clock: Arc<dyn Clock>) -> Self {
        Self { tasks, clock }
    }
}

#[async_trait]
impl<R> TaskQuery for TaskService<R>
where
    R: TaskRepository,
{
    async fn list_tasks(&self) -> Result<Vec<Task>, Error> {
        self.tasks
            .list_newest_first()
            .await
            .map_err(map_repository_error)
    }
}

#[async_trait]
impl<R> TaskCommand for TaskService<R>
where
    R: TaskRepository,
{
    async fn create_task(&self, input: NewTask) -> Result<Task, Error> {
        let now = self.clock.utc();
        let task = Task::create(TaskId::generate(now), &input, now);
        self.tasks
            .insert(&task)
            .await
            .map_err(map_repository_error)?;
        debug!(task_id = %task.id(), "task created");
        Ok(task)
    }

    async fn update_task(&self, id: &str, patch: TaskPatch) -> Result<(), Error> {
        let id = parse_task_id(id)?;
        patch
            .validate()
            .map_err(|err| Error::invalid_request(err.to_string()))?;
        let matched = self
            .tasks
            .update(&id, &patch)
            .await
            .map_err(map_repository_error)?;
        if !matched {
            return Err(Error::not_found(TASK_NOT_FOUND_MESSAGE));
        }
        Ok(())
    }

    async fn delete_task(&self, id: &str) -> Result<(), Error> {
        let id = parse_task_id(id)?;
        let removed = self
            .tasks
            .delete(&id)
            .await
            .map_err(map_repository_error)?;
        if !removed {
            return Err(Error::not_found(TASK_NOT_FOUND_MESSAGE));
        }
        debug!(task_id = %id, "task deleted");
        Ok(())
    }
}

#[cfg(test)]
#[path = "task_service_tests.rs"]
mod tests;
