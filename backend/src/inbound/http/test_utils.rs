//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use crate::domain::ports::{MockAuthCommand, MockTaskCommand, MockTaskQuery};
use crate::inbound::http::state::HttpState;

/// State whose auth port is `auth`; task ports panic if called.
pub fn state_with_auth(auth: MockAuthCommand) -> HttpState {
    HttpState::new(
        Arc::new(auth),
        Arc::new(MockTaskCommand::new()),
        Arc::new(MockTaskQuery::new()),
    )
}

/// State whose task ports are `tasks` and `query`; auth panics if called.
pub fn state_with_tasks(tasks: MockTaskCommand, query: MockTaskQuery) -> HttpState {
    HttpState::new(Arc::new(MockAuthCommand::new()), Arc::new(tasks), Arc::new(query))
}
