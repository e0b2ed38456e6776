//! Driving port for account creation and login.
//!
//! Inbound adapters call this port with validated credentials; the
//! implementation owns hashing and persistence. No session or token is
//! issued, so the responses only describe the account.

use async_trait::async_trait;

use crate::domain::{Error, LoginCredentials, SignupCredentials, UserId};

/// Result of a successful signup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignupResponse {
    /// Identifier of the new account.
    pub user_id: UserId,
    /// Stored display name.
    pub name: String,
}

/// Identity returned by a successful login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginResponse {
    /// Identifier of the account.
    pub user_id: UserId,
    /// Stored display name.
    pub name: String,
    /// Stored email.
    pub email: String,
}

/// Domain use-case port for authentication.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuthCommand: Send + Sync {
    /// Register a new account.
    async fn signup(&self, credentials: SignupCredentials) -> Result<SignupResponse, Error>;

    /// Check credentials against a stored account.
    async fn login(&self, credentials: LoginCredentials) -> Result<LoginResponse, Error>;
}
