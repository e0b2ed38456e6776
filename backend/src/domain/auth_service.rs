//! Account creation and credential checks.
//!
//! Implements [`AuthCommand`] over a [`UserRepository`] and a
//! [`PasswordHasher`]. Unknown emails and wrong passwords produce the same
//! error so callers cannot probe for registered accounts.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use tracing::{debug, info};

use crate::domain::ports::{
    AuthCommand, LoginResponse, PasswordHashError, PasswordHasher, SignupResponse,
    UserPersistenceError, UserRepository,
};
use crate::domain::{Error, LoginCredentials, SignupCredentials, User, UserId};

pub(crate) const USER_EXISTS_MESSAGE: &str = "User already exists";
pub(crate) const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid email or password";

fn map_user_error(error: UserPersistenceError) -> Error {
    match error {
        UserPersistenceError::DuplicateEmail { .. } => Error::conflict(USER_EXISTS_MESSAGE),
        UserPersistenceError::Connection { message } => {
            Error::internal(format!("user repository unavailable: {message}"))
        }
        UserPersistenceError::Query { message } => {
            Error::internal(format!("user repository error: {message}"))
        }
    }
}

fn map_hash_error(error: PasswordHashError) -> Error {
    Error::internal(error.to_string())
}

/// Authentication service implementing the [`AuthCommand`] driving port.
#[derive(Clone)]
pub struct AuthService<U, H> {
    users: Arc<U>,
    hasher: Arc<H>,
    clock: Arc<dyn Clock>,
}

impl<U, H> AuthService<U, H> {
    /// Create the service.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use mockable::DefaultClock;
    /// use taskplanner::domain::AuthService;
    /// use taskplanner::outbound::memory::MemoryUserRepository;
    /// use taskplanner::outbound::security::BcryptPasswordHasher;
    ///
    /// let _service = AuthService::new(
    ///     Arc::new(MemoryUserRepository::default()),
    ///     Arc::new(BcryptPasswordHasher::default()),
    ///     Arc::new(DefaultClock),
    /// );
    /// ```
    pub fn new(users: Arc<U>, hasher: Arc<H>, clock: Arc<dyn Clock>) -> Self {
        Self {
            users,
            hasher,
            clock,
        }
    }
}

#[async_trait]
impl<U, H> AuthCommand for AuthService<U, H>
where
    U: UserRepository,
    H: PasswordHasher,
{
    async fn signup(&self, credentials: SignupCredentials) -> Result<SignupResponse, Error> {
        let existing = self
            .users
            .find_by_email(credentials.email())
            .await
            .map_err(map_user_error)?;
        if existing.is_some() {
            debug!("signup rejected: email already registered");
            return Err(Error::conflict(USER_EXISTS_MESSAGE));
        }

        let password_hash = self
            .hasher
            .hash(credentials.password())
            .await
            .map_err(map_hash_error)?;
        let now = self.clock.utc();
        let user = User::new(
            UserId::generate(now),
            credentials.email(),
            credentials.name(),
            password_hash,
            now,
        );
        // A concurrent signup can still win the race; the unique index
        // reports it as a duplicate.
        self.users.insert(&user).await.map_err(map_user_error)?;

        info!(user_id = %user.id(), "account created");
        Ok(SignupResponse {
            user_id: user.id(),
            name: user.name().to_owned(),
        })
    }

    async fn login(&self, credentials: LoginCredentials) -> Result<LoginResponse, Error> {
        let Some(user) = self
            .users
            .find_by_email(credentials.email())
            .await
            .map_err(map_user_error)?
        else {
            return Err(Error::unauthorized(INVALID_CREDENTIALS_MESSAGE));
        };

        let verified = self
            .hasher
            .verify(credentials.password(), user.password_hash())
            .await
            .map_err(map_hash_error)?;
        if !verified {
            return Err(Error::unauthorized(INVALID_CREDENTIALS_MESSAGE));
        }

        Ok(LoginResponse {
            user_id: user.id(),
            name: user.name().to_owned(),
            email: user.email().to_owned(),
        })
    }
}

#[cfg(test)]
#[path = "auth_service_tests.rs"]
mod tests;
