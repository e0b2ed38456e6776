//! Driving port for task reads.

use async_trait::async_trait;

use crate::domain::{Error, Task};

/// Domain use-case port for listing tasks.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskQuery: Send + Sync {
    /// Every task, newest first.
    async fn list_tasks(&self) -> Result<Vec<Task>, Error>;
}
