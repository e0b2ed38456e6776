//! In-process fake of the task endpoints.

use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::{DateTime, Duration, TimeZone, Utc};
use task_board::{ClientError, CreatedTask, NewTaskRequest, Task, TaskApi};

/// Reference time used by fixtures.
pub fn fixture_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 2, 24, 10, 30, 0).unwrap()
}

/// Server double keeping tasks newest first.
#[derive(Default)]
pub struct FakeApi {
    tasks: Mutex<Vec<Task>>,
    next_id: AtomicUsize,
    failing: AtomicBool,
    list_calls: AtomicUsize,
}

impl FakeApi {
    /// Make every following call fail, or succeed again.
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Number of list requests served.
    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    /// Tasks as the server holds them.
    pub fn server_tasks(&self) -> Vec<Task> {
        self.tasks.lock().unwrap().clone()
    }

    fn check(&self) -> Result<(), ClientError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(ClientError::Transport {
                message: "connection refused".to_owned(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl TaskApi for FakeApi {
    async fn list_tasks(&self) -> Result<Vec<Task>, ClientError> {
        self.check()?;
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.server_tasks())
    }

    async fn create_task(&self, request: &NewTaskRequest) -> Result<CreatedTask, ClientError> {
        self.check()?;
        let n = self.next_id.fetch_add(1, Ordering::SeqCst);
        let id = format!("{n:024x}");
        let due_date = request
            .due_date
            .as_deref()
            .and_then(|raw| chrono::NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok())
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .map(|naive| naive.and_utc());
        let completed = request.status == task_board::TaskStatus::Completed;
        let task = Task {
            id: id.clone(),
            title: request.title.clone(),
            description: request.description.clone(),
            priority: request.priority,
            status: request.status,
            completed,
            due_date,
            created_at: fixture_now() + Duration::seconds(i64::try_from(n).unwrap()),
        };
        self.tasks.lock().unwrap().insert(0, task);
        Ok(CreatedTask {
            id,
            title: request.title.clone(),
            completed,
        })
    }

    async fn delete_task(&self, id: &str) -> Result<(), ClientError> {
        self.check()?;
        let mut tasks = self.tasks.lock().unwrap();
        let before = tasks.len();
        tasks.retain(|task| task.id != id);
        if tasks.len() == before {
            return Err(ClientError::Api {
                status: 404,
                message: "Task not found".to_owned(),
            });
        }
        Ok(())
    }
}
