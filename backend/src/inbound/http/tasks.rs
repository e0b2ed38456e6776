//! Task handlers.
//!
//! ```text
//! GET    /api/tasks
//! POST   /api/tasks       {"title":"A","priority":"high","dueDate":"2026-05-01"}
//! PATCH  /api/tasks/{id}  {"status":"completed","completed":true}
//! DELETE /api/tasks/{id}
//! ```

use actix_web::{delete, get, patch, post, web};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

use crate::domain::{Error, NewTask, Priority, Task, TaskPatch, TaskStatus, parse_due_date};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{invalid_value_error, missing_fields_error};

const TASK_UPDATED_MESSAGE: &str = "Task updated successfully";
const TASK_DELETED_MESSAGE: &str = "Task deleted successfully";

/// Render a timestamp as RFC 3339 UTC with millisecond precision.
pub(crate) fn format_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// A stored task as listed by `GET /api/tasks`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TaskBody {
    /// 24-hex identifier.
    #[serde(rename = "_id")]
    #[schema(example = "65f1a2b3c4d5e6f708091a2b")]
    pub id: String,
    /// Title.
    pub title: String,
    /// Description, empty when none.
    pub description: String,
    /// Priority.
    pub priority: Priority,
    /// Board column.
    pub status: TaskStatus,
    /// Completion flag.
    pub completed: bool,
    /// Due date, `null` when unset.
    #[schema(example = "2026-05-01T00:00:00.000Z")]
    pub due_date: Option<String>,
    /// Creation time.
    #[schema(example = "2026-02-24T10:30:00.000Z")]
    pub created_at: String,
}

impl From<&Task> for TaskBody {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id().to_string(),
            title: task.title().to_owned(),
            description: task.description().to_owned(),
            priority: task.priority(),
            status: task.status(),
            completed: task.completed(),
            due_date: task.due_date().map(format_timestamp),
            created_at: format_timestamp(task.created_at()),
        }
    }
}

/// Body of `POST /api/tasks`.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateTaskRequest {
    /// Required, non-empty title.
    pub title: Option<String>,
    /// Free text.
    pub description: Option<String>,
    /// `low`, `medium` or `high`; defaults to `low`.
    #[schema(example = "high")]
    pub priority: Option<String>,
    /// RFC 3339 timestamp or `YYYY-MM-DD`; anything else is stored as `null`.
    #[schema(example = "2026-05-01")]
    pub due_date: Option<String>,
    /// `pending`, `in-progress` or `completed`; defaults to `pending`.
    #[schema(example = "pending")]
    pub status: Option<String>,
}

/// Echo of a created task: the submitted fields plus what the server added.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatedTaskBody {
    /// Identifier of the new task.
    #[serde(rename = "_id")]
    pub id: String,
    /// Submitted title.
    pub title: String,
    /// Submitted description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Submitted priority.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
    /// Submitted status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Submitted due date, as sent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    /// Derived completion flag.
    pub completed: bool,
    /// Creation time.
    pub created_at: String,
}

fn deserialize_present<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

/// Body of `PATCH /api/tasks/{id}`. Omitted fields stay unchanged; unknown
/// keys, `_id` and `createdAt` are ignored.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTaskRequest {
    /// New title.
    pub title: Option<String>,
    /// New description.
    pub description: Option<String>,
    /// New priority.
    pub priority: Option<String>,
    /// New board column.
    pub status: Option<String>,
    /// New completion flag. Not derived from `status`.
    pub completed: Option<bool>,
    /// New due date; `null` clears it.
    #[serde(
        default,
        deserialize_with = "deserialize_present",
        skip_serializing_if = "Option::is_none"
    )]
    #[schema(value_type = Option<String>, nullable)]
    pub due_date: Option<Option<String>>,
}

/// Confirmation for update and delete.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct MessageBody {
    /// Confirmation text.
    pub message: String,
}

impl MessageBody {
    fn new(message: &str) -> Self {
        Self {
            message: message.to_owned(),
        }
    }
}

fn parse_priority(raw: Option<&str>) -> Result<Option<Priority>, Error> {
    raw.map(|value| {
        value
            .parse::<Priority>()
            .map_err(|err| invalid_value_error("priority", value, err.to_string()))
    })
    .transpose()
}

fn parse_status(raw: Option<&str>) -> Result<Option<TaskStatus>, Error> {
    raw.map(|value| {
        value
            .parse::<TaskStatus>()
            .map_err(|err| invalid_value_error("status", value, err.to_string()))
    })
    .transpose()
}

/// Empty selections on create fall back to the defaults.
fn non_empty(raw: Option<&str>) -> Option<&str> {
    raw.filter(|value| !value.is_empty())
}

impl TryFrom<&CreateTaskRequest> for NewTask {
    type Error = Error;

    fn try_from(request: &CreateTaskRequest) -> Result<Self, Self::Error> {
        let title = request.title.clone();
        if title.as_deref().is_none_or(str::is_empty) {
            return Err(missing_fields_error("Title is required", &["title"]));
        }
        Self::try_new(
            title,
            request.description.clone(),
            parse_priority(non_empty(request.priority.as_deref()))?,
            parse_status(non_empty(request.status.as_deref()))?,
            request.due_date.as_deref().and_then(parse_due_date),
        )
        .map_err(|err| Error::invalid_request(err.to_string()))
    }
}

impl TryFrom<UpdateTaskRequest> for TaskPatch {
    type Error = Error;

    fn try_from(request: UpdateTaskRequest) -> Result<Self, Self::Error> {
        Ok(Self {
            priority: parse_priority(request.priority.as_deref())?,
            status: parse_status(request.status.as_deref())?,
            title: request.title,
            description: request.description,
            completed: request.completed,
            due_date: request
                .due_date
                .map(|raw| raw.as_deref().and_then(parse_due_date)),
        })
    }
}

/// List every task, newest first.
#[utoipa::path(
    get,
    path = "/api/tasks",
    responses(
        (status = 200, description = "Tasks ordered by creation time, newest first", body = [TaskBody]),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["tasks"],
    operation_id = "listTasks"
)]
#[get("/tasks")]
pub async fn list_tasks(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<TaskBody>>> {
    let tasks = state.tasks_query.list_tasks().await?;
    Ok(web::Json(tasks.iter().map(TaskBody::from).collect()))
}

/// Create a task.
#[utoipa::path(
    post,
    path = "/api/tasks",
    request_body = CreateTaskRequest,
    responses(
        (status = 200, description = "Task created", body = CreatedTaskBody),
        (status = 400, description = "Missing title or invalid enum value", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["tasks"],
    operation_id = "createTask"
)]
#[post("/tasks")]
pub async fn create_task(
    state: web::Data<HttpState>,
    payload: web::Json<CreateTaskRequest>,
) -> ApiResult<web::Json<CreatedTaskBody>> {
    let request = payload.into_inner();
    let input = NewTask::try_from(&request)?;
    let task = state.tasks.create_task(input).await?;
    Ok(web::Json(CreatedTaskBody {
        id: task.id().to_string(),
        title: task.title().to_owned(),
        description: request.description,
        priority: request.priority,
        status: request.status,
        due_date: request.due_date,
        completed: task.completed(),
        created_at: format_timestamp(task.created_at()),
    }))
}

/// Shallow-merge fields into a task.
#[utoipa::path(
    patch,
    path = "/api/tasks/{id}",
    params(("id" = String, Path, description = "24-hex task identifier")),
    request_body = UpdateTaskRequest,
    responses(
        (status = 200, description = "Task updated", body = MessageBody),
        (status = 400, description = "Invalid task ID or field value", body = Error),
        (status = 404, description = "Task not found", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["tasks"],
    operation_id = "updateTask"
)]
#[patch("/tasks/{id}")]
pub async fn update_task(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<UpdateTaskRequest>,
) -> ApiResult<web::Json<MessageBody>> {
    let patch = TaskPatch::try_from(payload.into_inner())?;
    state.tasks.update_task(path.as_str(), patch).await?;
    Ok(web::Json(MessageBody::new(TASK_UPDATED_MESSAGE)))
}

/// Permanently remove a task.
#[utoipa::path(
    delete,
    path = "/api/tasks/{id}",
    params(("id" = String, Path, description = "24-hex task identifier")),
    responses(
        (status = 200, description = "Task deleted", body = MessageBody),
        (status = 400, description = "Invalid task ID", body = Error),
        (status = 404, description = "Task not found", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["tasks"],
    operation_id = "deleteTask"
)]
#[delete("/tasks/{id}")]
pub async fn delete_task(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<MessageBody>> {
    state.tasks.delete_task(path.as_str()).await?;
    Ok(web::Json(MessageBody::new(TASK_DELETED_MESSAGE)))
}

#[cfg(test)]
#[path = "tasks_tests.rs"]
mod tests;
