//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every HTTP endpoint from the inbound layer (auth,
//! tasks, health) and the wire schemas they exchange. The generated document
//! backs Swagger UI in debug builds.

use utoipa::OpenApi;

use crate::domain::{Error, ErrorCode, Priority, TaskStatus};
use crate::inbound::http::auth::{
    LoginRequest, LoginResponseBody, SignupRequest, SignupResponseBody,
};
use crate::inbound::http::tasks::{
    CreateTaskRequest, CreatedTaskBody, MessageBody, TaskBody, UpdateTaskRequest,
};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Task planner API",
        description = "Account signup and login plus task CRUD for a kanban board."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::auth::signup,
        crate::inbound::http::auth::login,
        crate::inbound::http::tasks::list_tasks,
        crate::inbound::http::tasks::create_task,
        crate::inbound::http::tasks::update_task,
        crate::inbound::http::tasks::delete_task,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        Error,
        ErrorCode,
        Priority,
        TaskStatus,
        TaskBody,
        CreateTaskRequest,
        CreatedTaskBody,
        UpdateTaskRequest,
        MessageBody,
        SignupRequest,
        SignupResponseBody,
        LoginRequest,
        LoginResponseBody,
    )),
    tags(
        (name = "auth", description = "Account signup and login"),
        (name = "tasks", description = "Task listing and mutation"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
