//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Each collection is a table of JSONB documents keyed by a 24-hex id.
//! Repositories only translate between documents and domain types; no
//! business logic resides here. Connections come from a lazily built `bb8`
//! pool shared by every repository.

mod diesel_basic_error_mapping;
mod diesel_task_repository;
mod diesel_user_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_task_repository::DieselTaskRepository;
pub use diesel_user_repository::DieselUserRepository;
pub use migrations::{MIGRATIONS, MigrationError, run_pending_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
