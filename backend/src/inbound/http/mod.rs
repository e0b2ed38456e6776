//! HTTP inbound adapter exposing the REST endpoints under `/api`.

pub mod auth;
pub mod error;
pub mod health;
pub mod state;
pub mod tasks;
#[cfg(test)]
pub mod test_utils;
pub(crate) mod validation;

pub use error::{ApiResult, json_config};
