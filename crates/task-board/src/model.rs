//! Wire types shared by the API client, the store and the board.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Raised when a priority or status string is not one of the known values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} `{value}`")]
pub struct UnknownValue {
    /// Which enumeration was being parsed.
    pub kind: &'static str,
    /// The rejected input.
    pub value: String,
}

/// Task urgency.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Default priority.
    #[default]
    Low,
    /// Medium priority.
    Medium,
    /// High priority.
    High,
}

impl Priority {
    /// Wire value.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    /// Capitalised label shown on cards.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = UnknownValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            other => Err(UnknownValue {
                kind: "priority",
                value: other.to_owned(),
            }),
        }
    }
}

/// Board column a task sits in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    /// Not started.
    #[default]
    Pending,
    /// Being worked on.
    InProgress,
    /// Done.
    Completed,
}

impl TaskStatus {
    /// Wire value.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in-progress",
            Self::Completed => "completed",
        }
    }

    /// Forward-only toggle step; `Completed` stays put.
    ///
    /// # Examples
    /// ```
    /// use task_board::TaskStatus;
    ///
    /// assert_eq!(TaskStatus::Pending.toggled(), TaskStatus::InProgress);
    /// assert_eq!(TaskStatus::Completed.toggled(), TaskStatus::Completed);
    /// ```
    pub const fn toggled(self) -> Self {
        match self {
            Self::Pending => Self::InProgress,
            Self::InProgress | Self::Completed => Self::Completed,
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskStatus {
    type Err = UnknownValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "in-progress" => Ok(Self::InProgress),
            "completed" => Ok(Self::Completed),
            other => Err(UnknownValue {
                kind: "status",
                value: other.to_owned(),
            }),
        }
    }
}

/// A task as listed by `GET /api/tasks`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// 24-hex identifier.
    #[serde(rename = "_id")]
    pub id: String,
    /// Title.
    pub title: String,
    /// Description, empty when none.
    #[serde(default)]
    pub description: String,
    /// Priority.
    #[serde(default)]
    pub priority: Priority,
    /// Board column.
    #[serde(default)]
    pub status: TaskStatus,
    /// Completion flag.
    #[serde(default)]
    pub completed: bool,
    /// Due date.
    #[serde(default)]
    pub due_date: Option<DateTime<Utc>>,
    /// Creation time.
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Move the task to `status`, keeping `completed` in step.
    pub fn set_status(&mut self, status: TaskStatus) {
        self.status = status;
        self.completed = status == TaskStatus::Completed;
    }

    /// True when a due date exists, lies before `now` and the task is not in
    /// the completed column. The `completed` flag is not consulted; a server
    /// patch may leave it out of step with `status`.
    pub fn is_overdue(&self, now: DateTime<Utc>) -> bool {
        self.status != TaskStatus::Completed && self.due_date.is_some_and(|due| due < now)
    }
}

/// Body of `POST /api/tasks`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTaskRequest {
    /// Title; must be non-blank.
    pub title: String,
    /// Free text.
    pub description: String,
    /// Priority.
    pub priority: Priority,
    /// `YYYY-MM-DD` or RFC 3339; `None` is sent as `null`.
    pub due_date: Option<String>,
    /// Initial column.
    pub status: TaskStatus,
}

/// Summary returned by `POST /api/tasks`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedTask {
    /// Identifier of the new task.
    #[serde(rename = "_id")]
    pub id: String,
    /// Stored title.
    pub title: String,
    /// Derived completion flag.
    pub completed: bool,
}

/// Body of `POST /api/auth/signup`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SignupRequest {
    /// Login email.
    pub email: String,
    /// Plain-text password.
    pub password: String,
    /// Display name; the server falls back to the email when omitted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Body of `POST /api/auth/login`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    /// Login email.
    pub email: String,
    /// Plain-text password.
    pub password: String,
}

/// Identity returned by login and held for the page lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    /// Account identifier.
    pub user_id: String,
    /// Display name.
    pub name: String,
    /// Login email.
    pub email: String,
}

/// Body returned by `POST /api/auth/signup`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupOutcome {
    /// Account identifier.
    pub user_id: String,
    /// Stored display name.
    pub name: String,
    /// Confirmation text.
    pub message: String,
}

/// Counts over the whole cache, ignoring filters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskStats {
    /// Every cached task.
    pub total: usize,
    /// Tasks whose status is `completed`.
    pub completed: usize,
    /// `total - completed`.
    pub pending: usize,
}

impl TaskStats {
    /// Count the given tasks.
    pub fn from_tasks<'a>(tasks: impl IntoIterator<Item = &'a Task>) -> Self {
        let (total, completed) = tasks.into_iter().fold((0, 0), |(total, done), task| {
            (total + 1, done + usize::from(task.status == TaskStatus::Completed))
        });
        Self {
            total,
            completed,
            pending: total - completed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rstest::rstest;
    use serde_json::json;

    fn task(status: TaskStatus) -> Task {
        Task {
            id: "65f1a2b3c4d5e6f708091a2b".to_owned(),
            title: "A".to_owned(),
            description: String::new(),
            priority: Priority::Low,
            status,
            completed: status == TaskStatus::Completed,
            due_date: None,
            created_at: Utc.with_ymd_and_hms(2026, 2, 24, 10, 30, 0).unwrap(),
        }
    }

    #[test]
    fn task_decodes_from_wire_shape() {
        let decoded: Task = serde_json::from_value(json!({
            "_id": "65f1a2b3c4d5e6f708091a2b",
            "title": "A",
            "description": "",
            "priority": "high",
            "status": "in-progress",
            "completed": false,
            "dueDate": "2026-05-01T00:00:00.000Z",
            "createdAt": "2026-02-24T10:30:00.000Z"
        }))
        .expect("valid task");

        assert_eq!(decoded.priority, Priority::High);
        assert_eq!(decoded.status, TaskStatus::InProgress);
        assert_eq!(
            decoded.due_date,
            Some(Utc.with_ymd_and_hms(2026, 5, 1, 0, 0, 0).unwrap())
        );
    }

    #[test]
    fn null_due_date_decodes_as_none() {
        let decoded: Task = serde_json::from_value(json!({
            "_id": "65f1a2b3c4d5e6f708091a2b",
            "title": "A",
            "dueDate": null,
            "createdAt": "2026-02-24T10:30:00.000Z"
        }))
        .expect("valid task");
        assert!(decoded.due_date.is_none());
        assert_eq!(decoded.status, TaskStatus::Pending);
    }

    #[test]
    fn new_task_request_serialises_null_due_date() {
        let body = serde_json::to_value(NewTaskRequest {
            title: "A".to_owned(),
            description: String::new(),
            priority: Priority::Medium,
            due_date: None,
            status: TaskStatus::InProgress,
        })
        .expect("serialise");
        assert_eq!(
            body,
            json!({
                "title": "A",
                "description": "",
                "priority": "medium",
                "dueDate": null,
                "status": "in-progress"
            })
        );
    }

    #[rstest]
    #[case(TaskStatus::Pending, false)]
    #[case(TaskStatus::InProgress, false)]
    #[case(TaskStatus::Completed, true)]
    fn set_status_keeps_completed_in_step(#[case] status: TaskStatus, #[case] completed: bool) {
        let mut task = task(TaskStatus::Completed);
        task.set_status(status);
        assert_eq!(task.completed, completed);
    }

    #[test]
    fn completed_tasks_are_never_overdue() {
        let now = Utc.with_ymd_and_hms(2026, 6, 1, 0, 0, 0).unwrap();
        let mut task = task(TaskStatus::Pending);
        task.due_date = Some(Utc.with_ymd_and_hms(2026, 5, 1, 0, 0, 0).unwrap());
        assert!(task.is_overdue(now));

        task.set_status(TaskStatus::Completed);
        assert!(!task.is_overdue(now));
    }

    #[test]
    fn overdue_follows_status_not_the_completed_flag() {
        let now = Utc.with_ymd_and_hms(2026, 6, 1, 0, 0, 0).unwrap();
        let mut task = task(TaskStatus::Pending);
        task.due_date = Some(Utc.with_ymd_and_hms(2026, 5, 1, 0, 0, 0).unwrap());

        task.status = TaskStatus::Completed;
        task.completed = false;
        assert!(!task.is_overdue(now));

        task.status = TaskStatus::InProgress;
        task.completed = true;
        assert!(task.is_overdue(now));
    }

    #[test]
    fn stats_split_total_into_completed_and_pending() {
        let tasks = [
            task(TaskStatus::Pending),
            task(TaskStatus::InProgress),
            task(TaskStatus::Completed),
        ];
        let stats = TaskStats::from_tasks(&tasks);
        assert_eq!(
            stats,
            TaskStats {
                total: 3,
                completed: 1,
                pending: 2
            }
        );
    }

    #[rstest]
    #[case("urgent")]
    #[case("High")]
    fn unknown_priorities_are_rejected(#[case] raw: &str) {
        let err = raw.parse::<Priority>().expect_err("unknown");
        assert_eq!(err.value, raw);
    }
}
