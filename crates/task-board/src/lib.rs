//! Client-side state for the task planner board.
//!
//! This crate speaks only the JSON wire contract of the task planner API and
//! is independent of backend types.
//!
//! # Overview
//!
//! - [`HttpClient`] implements [`TaskApi`] and [`AuthApi`] over `reqwest`.
//! - [`TaskStore`] caches the task list, derives filtered views and
//!   statistics, and applies drag/toggle transitions locally.
//! - [`AddTaskForm`] holds the add-task form fields and submission gate.
//! - [`BoardView`] turns store state into columns, cards and stat tiles.
//! - [`Session`] holds the identity returned by signup or login.
//!
//! # Example
//!
//! ```
//! use chrono::Utc;
//! use task_board::{Priority, Task, TaskFilter, TaskStatus};
//!
//! let task = Task {
//!     id: "65f1a2b3c4d5e6f708091a2b".to_owned(),
//!     title: "Write report".to_owned(),
//!     description: String::new(),
//!     priority: Priority::High,
//!     status: TaskStatus::Pending,
//!     completed: false,
//!     due_date: None,
//!     created_at: Utc::now(),
//! };
//! let filter = TaskFilter::default().with_search("REPORT");
//! assert!(filter.matches(&task));
//! ```

mod api;
mod board;
mod error;
mod filter;
mod form;
mod model;
mod session;
mod store;

pub use api::{AuthApi, HttpClient, TaskApi};
pub use board::{BoardView, COLUMNS, Card, Column, ColumnView, StatTile};
pub use error::ClientError;
pub use filter::{FilterParseError, PriorityFilter, StatusFilter, TaskFilter};
pub use form::AddTaskForm;
pub use model::{
    CreatedTask, Identity, LoginRequest, NewTaskRequest, Priority, SignupOutcome, SignupRequest,
    Task, TaskStats, TaskStatus, UnknownValue,
};
pub use session::Session;
pub use store::{GENERIC_ERROR_MESSAGE, TaskStore};
