//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driving ports (`AuthCommand`, `TaskCommand`, `TaskQuery`) are what inbound
//! adapters call. Driven ports (`UserRepository`, `TaskRepository`,
//! `PasswordHasher`) are what the services call out to.

mod macros;
pub(crate) use macros::define_port_error;

mod auth_command;
mod password_hasher;
mod task_command;
mod task_query;
mod task_repository;
mod user_repository;

#[cfg(test)]
pub use auth_command::MockAuthCommand;
pub use auth_command::{AuthCommand, LoginResponse, SignupResponse};
#[cfg(test)]
pub use password_hasher::MockPasswordHasher;
pub use password_hasher::{PasswordHashError, PasswordHasher};
#[cfg(test)]
pub use task_command::MockTaskCommand;
pub use task_command::TaskCommand;
#[cfg(test)]
pub use task_query::MockTaskQuery;
pub use task_query::TaskQuery;
#[cfg(test)]
pub use task_repository::MockTaskRepository;
pub use task_repository::{TaskPersistenceError, TaskRepository};
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{UserPersistenceError, UserRepository};
