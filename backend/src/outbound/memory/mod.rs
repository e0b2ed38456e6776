//! In-process document store implementing the repository ports.
//!
//! Used by the test suites and by debug builds started without a database
//! URL. Contents live for the lifetime of the process.

mod task_repository;
mod user_repository;

pub use task_repository::MemoryTaskRepository;
pub use user_repository::MemoryUserRepository;
