//! Add-task form state.

use crate::api::TaskApi;
use crate::error::ClientError;
use crate::model::{NewTaskRequest, Priority, TaskStatus};
use crate::store::TaskStore;

/// Field values and the submission gate of the add-task form.
///
/// # Examples
/// ```
/// use task_board::AddTaskForm;
///
/// let mut form = AddTaskForm::default();
/// assert!(!form.can_submit());
/// form.title = "Write report".to_owned();
/// assert!(form.can_submit());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddTaskForm {
    /// Title input.
    pub title: String,
    /// Description input.
    pub description: String,
    /// Priority select.
    pub priority: Priority,
    /// Status select.
    pub status: TaskStatus,
    /// Date input; empty means no due date.
    pub due_date: String,
    is_submitting: bool,
}

impl AddTaskForm {
    /// Whether the submit control is enabled.
    pub fn can_submit(&self) -> bool {
        !self.is_submitting && !self.title.trim().is_empty()
    }

    /// Whether a submission is outstanding.
    pub fn is_submitting(&self) -> bool {
        self.is_submitting
    }

    /// Start a submission and return the request body, or `None` when the
    /// form cannot be submitted.
    pub fn begin_submit(&mut self) -> Option<NewTaskRequest> {
        if !self.can_submit() {
            return None;
        }
        self.is_submitting = true;
        Some(NewTaskRequest {
            title: self.title.clone(),
            description: self.description.clone(),
            priority: self.priority,
            due_date: Some(self.due_date.clone()).filter(|date| !date.is_empty()),
            status: self.status,
        })
    }

    /// Finish a submission, resetting every field to its default.
    pub fn finish_submit(&mut self) {
        *self = Self::default();
    }

    /// Submit through `store`. Returns `Ok(false)` without calling the
    /// server when the form cannot be submitted.
    ///
    /// The form resets once the request completes, whatever its outcome;
    /// failures surface through the store's inline error.
    ///
    /// # Errors
    /// Returns the store's failure after resetting the form.
    pub async fn submit<A>(&mut self, store: &mut TaskStore<A>) -> Result<bool, ClientError>
    where
        A: TaskApi + ?Sized,
    {
        let Some(request) = self.begin_submit() else {
            return Ok(false);
        };
        let outcome = store.add(&request).await;
        self.finish_submit();
        outcome.map(|()| true)
    }
}
