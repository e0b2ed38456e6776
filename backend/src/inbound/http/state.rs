//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they only depend
//! on domain ports and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{AuthCommand, TaskCommand, TaskQuery};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Signup and login.
    pub auth: Arc<dyn AuthCommand>,
    /// Task mutations.
    pub tasks: Arc<dyn TaskCommand>,
    /// Task reads.
    pub tasks_query: Arc<dyn TaskQuery>,
}

impl HttpState {
    /// Bundle the driving ports.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use mockable::DefaultClock;
    /// use taskplanner::domain::{AuthService, TaskService};
    /// use taskplanner::inbound::http::state::HttpState;
    /// use taskplanner::outbound::memory::{MemoryTaskRepository, MemoryUserRepository};
    /// use taskplanner::outbound::security::BcryptPasswordHasher;
    ///
    /// let tasks = Arc::new(TaskService::new(
    ///     Arc::new(MemoryTaskRepository::default()),
    ///     Arc::new(DefaultClock),
    /// ));
    /// let state = HttpState::new(
    ///     Arc::new(AuthService::new(
    ///         Arc::new(MemoryUserRepository::default()),
    ///         Arc::new(BcryptPasswordHasher::default()),
    ///         Arc::new(DefaultClock),
    ///     )),
    ///     tasks.clone(),
    ///     tasks,
    /// );
    /// let _auth = state.auth.clone();
    /// ```
    pub fn new(
        auth: Arc<dyn AuthCommand>,
        tasks: Arc<dyn TaskCommand>,
        tasks_query: Arc<dyn TaskQuery>,
    ) -> Self {
        Self {
            auth,
            tasks,
            tasks_query,
        }
    }
}
