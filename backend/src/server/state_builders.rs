//! Builders wiring domain services onto storage adapters.

use std::sync::Arc;

use mockable::Clock;

use crate::domain::ports::{TaskRepository, UserRepository};
use crate::domain::{AuthService, TaskService};
use crate::inbound::http::state::HttpState;
use crate::outbound::memory::{MemoryTaskRepository, MemoryUserRepository};
use crate::outbound::persistence::{DieselTaskRepository, DieselUserRepository};
use crate::outbound::security::BcryptPasswordHasher;

use super::ServerConfig;

/// Wrap the auth and task services around a pair of repositories.
fn services_over<U, T>(users: U, tasks: T, clock: Arc<dyn Clock>) -> HttpState
where
    U: UserRepository + 'static,
    T: TaskRepository + 'static,
{
    let auth = Arc::new(AuthService::new(
        Arc::new(users),
        Arc::new(BcryptPasswordHasher::default()),
        clock.clone(),
    ));
    let tasks = Arc::new(TaskService::new(Arc::new(tasks), clock));
    HttpState::new(auth, tasks.clone(), tasks)
}

/// Build handler state backed by a fresh in-memory store.
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use mockable::DefaultClock;
/// use taskplanner::server::in_memory_http_state;
///
/// let state = in_memory_http_state(Arc::new(DefaultClock));
/// let _tasks = state.tasks_query.clone();
/// ```
pub fn in_memory_http_state(clock: Arc<dyn Clock>) -> HttpState {
    services_over(
        MemoryUserRepository::default(),
        MemoryTaskRepository::default(),
        clock,
    )
}

/// Build handler state from the server configuration: PostgreSQL when a
/// pool is attached, process memory otherwise.
pub(crate) fn build_http_state(config: &ServerConfig) -> HttpState {
    match &config.db_pool {
        Some(pool) => services_over(
            DieselUserRepository::new(pool.clone()),
            DieselTaskRepository::new(pool.clone()),
            config.clock.clone(),
        ),
        None => in_memory_http_state(config.clock.clone()),
    }
}
