//! In-memory `tasks` collection.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::ports::{TaskPersistenceError, TaskRepository};
use crate::domain::{Task, TaskId, TaskPatch};

/// Tasks in insertion order.
#[derive(Debug, Default)]
pub struct MemoryTaskRepository {
    tasks: RwLock<Vec<Task>>,
}

#[async_trait]
impl TaskRepository for MemoryTaskRepository {
    async fn list_newest_first(&self) -> Result<Vec<Task>, TaskPersistenceError> {
        // Later inserts win ties on equal creation times.
        let mut tasks: Vec<Task> = self.tasks.read().await.iter().rev().cloned().collect();
        tasks.sort_by(|a, b| b.created_at().cmp(&a.created_at()));
        Ok(tasks)
    }

    async fn insert(&self, task: &Task) -> Result<(), TaskPersistenceError> {
        self.tasks.write().await.push(task.clone());
        Ok(())
    }

    async fn update(&self, id: &TaskId, patch: &TaskPatch) -> Result<bool, TaskPersistenceError> {
        let mut guard = self.tasks.write().await;
        let Some(task) = guard.iter_mut().find(|task| task.id() == *id) else {
            return Ok(false);
        };
        task.apply(patch);
        Ok(true)
    }

    async fn delete(&self, id: &TaskId) -> Result<bool, TaskPersistenceError> {
        let mut guard = self.tasks.write().await;
        let before = guard.len();
        guard.retain(|task| task.id() != *id);
        Ok(guard.len() != before)
    }
}
