//! Task documents and the values they are built from.
//!
//! ## Invariants
//! - A freshly created task has a non-empty title and
//!   `completed == (status == Completed)`.
//! - Partial updates merge shallowly and do not re-derive `completed`; the
//!   caller keeps the two fields consistent.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

use super::TaskId;

/// Rejected enum input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TaskValidationError {
    /// Title missing or empty.
    #[error("Title is required")]
    MissingTitle,
    /// Priority outside `low|medium|high`.
    #[error("priority must be one of low, medium, high")]
    InvalidPriority,
    /// Status outside `pending|in-progress|completed`.
    #[error("status must be one of pending, in-progress, completed")]
    InvalidStatus,
}

/// Task urgency.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema,
)]
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
    /// Wire representation.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = TaskValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            _ => Err(TaskValidationError::InvalidPriority),
        }
    }
}

/// Board column a task sits in.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema,
)]
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
    /// Wire representation.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in-progress",
            Self::Completed => "completed",
        }
    }

    /// Value of the derived `completed` flag for this status.
    pub const fn is_completed(self) -> bool {
        matches!(self, Self::Completed)
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskStatus {
    type Err = TaskValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "in-progress" => Ok(Self::InProgress),
            "completed" => Ok(Self::Completed),
            _ => Err(TaskValidationError::InvalidStatus),
        }
    }
}

/// Interpret a submitted due date.
///
/// Accepts RFC 3339 timestamps and bare `YYYY-MM-DD` dates (midnight UTC).
/// Anything else yields `None`, which is stored as a null due date.
///
/// # Examples
/// ```
/// use taskplanner::domain::parse_due_date;
///
/// let due = parse_due_date("2026-05-01").expect("calendar date");
/// assert_eq!(due.to_rfc3339(), "2026-05-01T00:00:00+00:00");
/// assert!(parse_due_date("").is_none());
/// assert!(parse_due_date("next tuesday").is_none());
/// ```
pub fn parse_due_date(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) {
        return Some(timestamp.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Validated input for creating a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    title: String,
    description: Option<String>,
    priority: Option<Priority>,
    status: Option<TaskStatus>,
    due_date: Option<DateTime<Utc>>,
}

impl NewTask {
    /// Validate creation input. Absent fields take their defaults later.
    ///
    /// # Examples
    /// ```
    /// use taskplanner::domain::{NewTask, Priority, TaskValidationError};
    ///
    /// let task = NewTask::try_new(Some("Ship it".into()), None, Some(Priority::High), None, None)
    ///     .expect("valid task");
    /// assert_eq!(task.title(), "Ship it");
    /// assert_eq!(
    ///     NewTask::try_new(Some(String::new()), None, None, None, None),
    ///     Err(TaskValidationError::MissingTitle)
    /// );
    /// ```
    pub fn try_new(
        title: Option<String>,
        description: Option<String>,
        priority: Option<Priority>,
        status: Option<TaskStatus>,
        due_date: Option<DateTime<Utc>>,
    ) -> Result<Self, TaskValidationError> {
        let title = title
            .filter(|value| !value.is_empty())
            .ok_or(TaskValidationError::MissingTitle)?;
        Ok(Self {
            title,
            description,
            priority,
            status,
            due_date,
        })
    }

    /// Submitted title.
    pub fn title(&self) -> &str {
        self.title.as_str()
    }

    /// Submitted description, if any.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Submitted priority, if any.
    pub fn priority(&self) -> Option<Priority> {
        self.priority
    }

    /// Submitted status, if any.
    pub fn status(&self) -> Option<TaskStatus> {
        self.status
    }

    /// Parsed due date, if any.
    pub fn due_date(&self) -> Option<DateTime<Utc>> {
        self.due_date
    }
}

/// Every stored field of a task, used to rehydrate documents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskParts {
    /// Identifier.
    pub id: TaskId,
    /// Title.
    pub title: String,
    /// Description, empty when none.
    pub description: String,
    /// Priority.
    pub priority: Priority,
    /// Status column.
    pub status: TaskStatus,
    /// Completion flag as stored.
    pub completed: bool,
    /// Optional due date.
    pub due_date: Option<DateTime<Utc>>,
    /// Creation time.
    pub created_at: DateTime<Utc>,
}

/// A stored task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    parts: TaskParts,
}

impl Task {
    /// Build a new task from validated input, applying the default field policy.
    pub fn create(id: TaskId, input: &NewTask, created_at: DateTime<Utc>) -> Self {
        let status = input.status.unwrap_or_default();
        Self {
            parts: TaskParts {
                id,
                title: input.title.clone(),
                description: input.description.clone().unwrap_or_default(),
                priority: input.priority.unwrap_or_default(),
                status,
                completed: status.is_completed(),
                due_date: input.due_date,
                created_at,
            },
        }
    }

    /// Rehydrate a stored document without re-validating it.
    pub fn from_parts(parts: TaskParts) -> Self {
        Self { parts }
    }

    /// Decompose into raw parts.
    pub fn into_parts(self) -> TaskParts {
        self.parts
    }

    /// Identifier.
    pub fn id(&self) -> TaskId {
        self.parts.id
    }

    /// Title.
    pub fn title(&self) -> &str {
        self.parts.title.as_str()
    }

    /// Description, empty when none.
    pub fn description(&self) -> &str {
        self.parts.description.as_str()
    }

    /// Priority.
    pub fn priority(&self) -> Priority {
        self.parts.priority
    }

    /// Status column.
    pub fn status(&self) -> TaskStatus {
        self.parts.status
    }

    /// Completion flag as stored.
    pub fn completed(&self) -> bool {
        self.parts.completed
    }

    /// Optional due date.
    pub fn due_date(&self) -> Option<DateTime<Utc>> {
        self.parts.due_date
    }

    /// Creation time.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.parts.created_at
    }

    /// Shallow-merge `patch` into this task. Fields the patch omits keep
    /// their value; `completed` is taken as given.
    pub fn apply(&mut self, patch: &TaskPatch) {
        let parts = &mut self.parts;
        if let Some(title) = &patch.title {
            parts.title.clone_from(title);
        }
        if let Some(description) = &patch.description {
            parts.description.clone_from(description);
        }
        if let Some(priority) = patch.priority {
            parts.priority = priority;
        }
        if let Some(status) = patch.status {
            parts.status = status;
        }
        if let Some(completed) = patch.completed {
            parts.completed = completed;
        }
        if let Some(due_date) = patch.due_date {
            parts.due_date = due_date;
        }
    }
}

/// Partial task update. `None` leaves a field untouched; for `due_date`,
/// `Some(None)` clears it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskPatch {
    /// New title.
    pub title: Option<String>,
    /// New description.
    pub description: Option<String>,
    /// New priority.
    pub priority: Option<Priority>,
    /// New status.
    pub status: Option<TaskStatus>,
    /// New completion flag.
    pub completed: Option<bool>,
    /// New or cleared due date.
    pub due_date: Option<Option<DateTime<Utc>>>,
}

impl TaskPatch {
    /// True when the patch changes nothing.
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// Reject patches that would empty the title.
    pub fn validate(&self) -> Result<(), TaskValidationError> {
        match &self.title {
            Some(title) if title.is_empty() => Err(TaskValidationError::MissingTitle),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rstest::{fixture, rstest};

    #[fixture]
    fn created_at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5)
            .single()
            .expect("valid timestamp")
    }

    fn new_task(status: Option<TaskStatus>) -> NewTask {
        NewTask::try_new(Some("A".to_owned()), None, None, status, None).expect("valid task")
    }

    #[rstest]
    fn create_applies_defaults(created_at: DateTime<Utc>) {
        let task = Task::create(TaskId::generate(created_at), &new_task(None), created_at);
        assert_eq!(task.description(), "");
        assert_eq!(task.priority(), Priority::Low);
        assert_eq!(task.status(), TaskStatus::Pending);
        assert!(!task.completed());
        assert!(task.due_date().is_none());
        assert_eq!(task.created_at(), created_at);
    }

    #[rstest]
    #[case(TaskStatus::Pending, false)]
    #[case(TaskStatus::InProgress, false)]
    #[case(TaskStatus::Completed, true)]
    fn create_derives_completed_from_status(
        created_at: DateTime<Utc>,
        #[case] status: TaskStatus,
        #[case] completed: bool,
    ) {
        let task = Task::create(
            TaskId::generate(created_at),
            &new_task(Some(status)),
            created_at,
        );
        assert_eq!(task.completed(), completed);
    }

    #[rstest]
    #[case(None)]
    #[case(Some(""))]
    fn missing_or_empty_title_is_rejected(#[case] title: Option<&str>) {
        let err = NewTask::try_new(title.map(str::to_owned), None, None, None, None)
            .expect_err("empty title");
        assert_eq!(err, TaskValidationError::MissingTitle);
    }

    #[rstest]
    fn whitespace_title_is_kept_verbatim() {
        let task = NewTask::try_new(Some("  ".to_owned()), None, None, None, None)
            .expect("whitespace is a title");
        assert_eq!(task.title(), "  ");
    }

    #[rstest]
    fn apply_merges_shallowly_without_rederiving_completed(created_at: DateTime<Utc>) {
        let mut task = Task::create(TaskId::generate(created_at), &new_task(None), created_at);
        task.apply(&TaskPatch {
            status: Some(TaskStatus::Completed),
            ..TaskPatch::default()
        });
        assert_eq!(task.status(), TaskStatus::Completed);
        assert!(!task.completed());
        assert_eq!(task.title(), "A");
    }

    #[rstest]
    fn apply_can_clear_due_date(created_at: DateTime<Utc>) {
        let input = NewTask::try_new(Some("A".to_owned()), None, None, None, Some(created_at))
            .expect("valid task");
        let mut task = Task::create(TaskId::generate(created_at), &input, created_at);
        task.apply(&TaskPatch {
            due_date: Some(None),
            ..TaskPatch::default()
        });
        assert!(task.due_date().is_none());
    }

    #[rstest]
    #[case("2026-05-01T10:30:00Z", true)]
    #[case("2026-05-01T10:30:00+02:00", true)]
    #[case("2026-05-01", true)]
    #[case("2026-13-01", false)]
    #[case("soon", false)]
    fn due_date_parsing(#[case] raw: &str, #[case] parses: bool) {
        assert_eq!(parse_due_date(raw).is_some(), parses);
    }

    #[rstest]
    #[case("low", Ok(Priority::Low))]
    #[case("high", Ok(Priority::High))]
    #[case("HIGH", Err(TaskValidationError::InvalidPriority))]
    fn priority_from_str(
        #[case] raw: &str,
        #[case] expected: Result<Priority, TaskValidationError>,
    ) {
        assert_eq!(raw.parse::<Priority>(), expected);
    }

    #[rstest]
    fn status_serialises_in_kebab_case() {
        let value = serde_json::to_value(TaskStatus::InProgress).expect("serialise");
        assert_eq!(value, serde_json::json!("in-progress"));
    }

    #[rstest]
    fn patch_emptiness_and_title_validation() {
        assert!(TaskPatch::default().is_empty());
        let patch = TaskPatch {
            title: Some(String::new()),
            ..TaskPatch::default()
        };
        assert!(!patch.is_empty());
        assert_eq!(patch.validate(), Err(TaskValidationError::MissingTitle));
        let spaced = TaskPatch {
            title: Some(" ".to_owned()),
            ..TaskPatch::default()
        };
        assert_eq!(spaced.validate(), Ok(()));
    }
}
