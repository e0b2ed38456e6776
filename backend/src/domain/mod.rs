//! Domain primitives, aggregates and services.
//!
//! Purpose: define strongly typed entities used by the HTTP and persistence
//! adapters, plus the services that implement the driving ports. Types are
//! transport agnostic; wire DTOs live in `inbound::http`.
//!
//! Public surface:
//! - `Error` / `ErrorCode`: transport-agnostic failure payload.
//! - `User`, `Task` and their identifiers.
//! - `AuthService`, `TaskService`: driving port implementations.

pub mod auth;
pub mod auth_service;
pub mod document_id;
pub mod error;
pub mod ports;
pub mod task;
pub mod task_service;
pub mod trace_id;
pub mod user;

pub use self::auth::{CredentialsValidationError, LoginCredentials, SignupCredentials};
pub use self::auth_service::AuthService;
pub use self::document_id::{DOCUMENT_ID_LEN, DocumentId, DocumentIdError, TaskId, UserId};
pub use self::error::{Error, ErrorCode, TRACE_ID_HEADER};
pub use self::task::{
    NewTask, Priority, Task, TaskParts, TaskPatch, TaskStatus, TaskValidationError,
    parse_due_date,
};
pub use self::task_service::TaskService;
pub use self::trace_id::TraceId;
pub use self::user::{PasswordHash, User};

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use actix_web::HttpResponse;
/// use taskplanner::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<HttpResponse> {
///     Err(Error::not_found("Task not found"))
/// }
/// ```
pub type ApiResult<T> = Result<T, Error>;
