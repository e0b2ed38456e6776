//! Internal Diesel rows and the JSON documents they carry.
//!
//! These types never leave the persistence layer. Documents use the same
//! camelCase field names as the HTTP wire format.

use chrono::{DateTime, SecondsFormat, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::{
    PasswordHash, Priority, Task, TaskId, TaskParts, TaskPatch, TaskStatus, User, UserId,
};

use super::schema::{tasks, users};

/// Row struct for reading from the users table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserRow {
    pub id: String,
    pub doc: Value,
}

/// Insertable struct for new user documents.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
pub(crate) struct NewUserRow<'a> {
    pub id: &'a str,
    pub doc: &'a Value,
}

/// Row struct for reading from the tasks table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = tasks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct TaskRow {
    pub id: String,
    #[expect(dead_code, reason = "ordering column; the document carries createdAt")]
    pub created_at: DateTime<Utc>,
    pub doc: Value,
}

/// Insertable struct for new task documents.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = tasks)]
pub(crate) struct NewTaskRow<'a> {
    pub id: &'a str,
    pub created_at: DateTime<Utc>,
    pub doc: &'a Value,
}

/// Stored form of a user.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct UserDocument {
    pub email: String,
    pub name: String,
    pub password_hash: PasswordHash,
    pub created_at: DateTime<Utc>,
}

impl UserDocument {
    pub(crate) fn from_user(user: &User) -> Self {
        Self {
            email: user.email().to_owned(),
            name: user.name().to_owned(),
            password_hash: user.password_hash().clone(),
            created_at: user.created_at(),
        }
    }

    pub(crate) fn into_user(self, id: UserId) -> User {
        User::new(id, self.email, self.name, self.password_hash, self.created_at)
    }
}

/// Stored form of a task. Missing fields fall back to the creation defaults
/// so documents written by older clients still load.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct TaskDocument {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub status: TaskStatus,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub due_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl TaskDocument {
    pub(crate) fn from_task(task: &Task) -> Self {
        Self {
            title: task.title().to_owned(),
            description: task.description().to_owned(),
            priority: task.priority(),
            status: task.status(),
            completed: task.completed(),
            due_date: task.due_date(),
            created_at: task.created_at(),
        }
    }

    pub(crate) fn into_task(self, id: TaskId) -> Task {
        Task::from_parts(TaskParts {
            id,
            title: self.title,
            description: self.description,
            priority: self.priority,
            status: self.status,
            completed: self.completed,
            due_date: self.due_date,
            created_at: self.created_at,
        })
    }
}

/// Render `patch` as the JSON object merged into a stored task document.
///
/// Only present fields are emitted; a cleared due date becomes `null`.
pub(crate) fn patch_document(patch: &TaskPatch) -> Value {
    let mut fields = Map::new();
    if let Some(title) = &patch.title {
        fields.insert("title".to_owned(), Value::from(title.as_str()));
    }
    if let Some(description) = &patch.description {
        fields.insert("description".to_owned(), Value::from(description.as_str()));
    }
    if let Some(priority) = patch.priority {
        fields.insert("priority".to_owned(), Value::from(priority.as_str()));
    }
    if let Some(status) = patch.status {
        fields.insert("status".to_owned(), Value::from(status.as_str()));
    }
    if let Some(completed) = patch.completed {
        fields.insert("completed".to_owned(), Value::from(completed));
    }
    if let Some(due_date) = patch.due_date {
        let rendered = due_date
            .map(|date| Value::from(date.to_rfc3339_opts(SecondsFormat::Millis, true)))
            .unwrap_or(Value::Null);
        fields.insert("dueDate".to_owned(), rendered);
    }
    Value::Object(fields)
}
