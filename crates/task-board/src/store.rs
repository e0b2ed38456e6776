//! Client-side task cache.
//!
//! The store mirrors the server list after [`TaskStore::load`]. Drag and
//! toggle transitions are applied to the cache only and never sent to the
//! server, so the cache may drift from the server until the next load. Add
//! and delete go to the server first; add re-fetches the list, delete
//! removes the one entry locally.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::api::TaskApi;
use crate::error::ClientError;
use crate::filter::{PriorityFilter, StatusFilter, TaskFilter};
use crate::model::{NewTaskRequest, Task, TaskStats, TaskStatus};

/// Inline message shown after a failed load, add or delete.
pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong. Please try again.";

/// Cache of the task list with derived views.
pub struct TaskStore<A: ?Sized> {
    api: Arc<A>,
    tasks: Vec<Task>,
    filter: TaskFilter,
    loading: bool,
    error: Option<&'static str>,
}

impl<A> TaskStore<A>
where
    A: TaskApi + ?Sized,
{
    /// Create an empty store that is loading until [`Self::load`] finishes.
    pub fn new(api: Arc<A>) -> Self {
        Self {
            api,
            tasks: Vec::new(),
            filter: TaskFilter::default(),
            loading: true,
            error: None,
        }
    }

    /// Replace the cache with the server list.
    ///
    /// # Errors
    /// Returns the API failure; the cache is left unchanged and
    /// [`Self::error`] reports [`GENERIC_ERROR_MESSAGE`].
    pub async fn load(&mut self) -> Result<(), ClientError> {
        let outcome = self.api.list_tasks().await;
        self.loading = false;
        let tasks = self.record(outcome)?;
        debug!(count = tasks.len(), "task list loaded");
        self.tasks = tasks;
        Ok(())
    }

    /// Create a task on the server, then re-fetch the whole list.
    ///
    /// # Errors
    /// Returns the failure of either call; the cache is left unchanged.
    pub async fn add(&mut self, request: &NewTaskRequest) -> Result<(), ClientError> {
        let outcome = self.api.create_task(request).await;
        let created = self.record(outcome)?;
        debug!(task_id = %created.id, "task created");
        self.load().await
    }

    /// Delete a task on the server, then drop it from the cache.
    ///
    /// # Errors
    /// Returns the API failure; the cache is left unchanged.
    pub async fn delete(&mut self, id: &str) -> Result<(), ClientError> {
        let outcome = self.api.delete_task(id).await;
        self.record(outcome)?;
        self.tasks.retain(|task| task.id != id);
        Ok(())
    }

    /// Apply a drop: move the task into `destination` and recompute
    /// `completed`. A drop outside any column (`None`) or onto an unknown
    /// task changes nothing. Returns whether the cache changed.
    pub fn drag_end(&mut self, id: &str, destination: Option<TaskStatus>) -> bool {
        let Some(destination) = destination else {
            return false;
        };
        let Some(task) = self.task_mut(id) else {
            return false;
        };
        task.set_status(destination);
        true
    }

    /// Advance a task one step along pending, in-progress, completed.
    /// Completed tasks stay completed. Returns the new status, or `None`
    /// when the task is not cached.
    pub fn toggle(&mut self, id: &str) -> Option<TaskStatus> {
        let task = self.task_mut(id)?;
        let next = task.status.toggled();
        task.set_status(next);
        Some(next)
    }

    /// Every cached task in server order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Cached tasks passing the current filter, in server order.
    pub fn visible(&self) -> Vec<&Task> {
        self.tasks
            .iter()
            .filter(|task| self.filter.matches(task))
            .collect()
    }

    /// Counts over the whole cache, ignoring filters.
    pub fn stats(&self) -> TaskStats {
        TaskStats::from_tasks(&self.tasks)
    }

    /// Current filter.
    pub fn filter(&self) -> &TaskFilter {
        &self.filter
    }

    /// Replace the search text.
    pub fn set_search(&mut self, search: impl Into<String>) {
        self.filter = std::mem::take(&mut self.filter).with_search(search);
    }

    /// Replace the priority selection.
    pub fn set_priority_filter(&mut self, priority: PriorityFilter) {
        self.filter = std::mem::take(&mut self.filter).with_priority(priority);
    }

    /// Replace the status selection.
    pub fn set_status_filter(&mut self, status: StatusFilter) {
        self.filter = std::mem::take(&mut self.filter).with_status(status);
    }

    /// True until the first load finishes, whether or not it succeeded.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Inline error from the last network operation, if it failed.
    pub fn error(&self) -> Option<&str> {
        self.error
    }

    /// Drop the cache and filters, e.g. on logout.
    pub fn clear(&mut self) {
        self.tasks.clear();
        self.filter = TaskFilter::default();
        self.error = None;
    }

    fn task_mut(&mut self, id: &str) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|task| task.id == id)
    }

    fn record<T>(&mut self, outcome: Result<T, ClientError>) -> Result<T, ClientError> {
        match outcome {
            Ok(value) => {
                self.error = None;
                Ok(value)
            }
            Err(err) => {
                warn!(error = %err, "task request failed");
                self.error = Some(GENERIC_ERROR_MESSAGE);
                Err(err)
            }
        }
    }
}
