//! Signed-in identity held for the page lifetime.
//!
//! No token is issued by the server; the session only remembers who logged
//! in so the board can greet them.

use std::sync::Arc;

use tracing::warn;

use crate::api::{AuthApi, TaskApi};
use crate::error::ClientError;
use crate::model::{Identity, LoginRequest, SignupRequest};
use crate::store::TaskStore;

const AUTH_FAILED_MESSAGE: &str = "Authentication failed";
const NETWORK_ERROR_MESSAGE: &str = "An error occurred. Please try again.";

/// Identity plus the auth form's inline error.
pub struct Session<A: ?Sized> {
    api: Arc<A>,
    identity: Option<Identity>,
    error: Option<String>,
}

impl<A> Session<A>
where
    A: AuthApi + ?Sized,
{
    /// Start signed out.
    pub fn new(api: Arc<A>) -> Self {
        Self {
            api,
            identity: None,
            error: None,
        }
    }

    /// Create an account and sign in as it.
    ///
    /// The signup response carries no email, so the identity keeps the one
    /// submitted.
    ///
    /// # Errors
    /// Returns the API failure and records an inline message.
    pub async fn signup(&mut self, request: &SignupRequest) -> Result<&Identity, ClientError> {
        let outcome = self.api.signup(request).await;
        let created = self.record(outcome)?;
        Ok(self.identity.insert(Identity {
            user_id: created.user_id,
            name: created.name,
            email: request.email.trim().to_owned(),
        }))
    }

    /// Sign in with existing credentials.
    ///
    /// # Errors
    /// Returns the API failure and records an inline message.
    pub async fn login(&mut self, request: &LoginRequest) -> Result<&Identity, ClientError> {
        let outcome = self.api.login(request).await;
        let identity = self.record(outcome)?;
        Ok(self.identity.insert(identity))
    }

    /// Drop the identity and the task cache.
    pub fn logout<T>(&mut self, store: &mut TaskStore<T>)
    where
        T: TaskApi + ?Sized,
    {
        self.identity = None;
        self.error = None;
        store.clear();
    }

    /// Signed-in identity, if any.
    pub fn identity(&self) -> Option<&Identity> {
        self.identity.as_ref()
    }

    /// Name shown in the greeting: the display name, or the email when the
    /// name is empty.
    pub fn greeting_name(&self) -> Option<&str> {
        self.identity.as_ref().map(|identity| {
            if identity.name.is_empty() {
                identity.email.as_str()
            } else {
                identity.name.as_str()
            }
        })
    }

    /// Inline error from the last signup or login attempt.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Clear the inline error, e.g. when switching between login and signup.
    pub fn clear_error(&mut self) {
        self.error = None;
    }

    fn record<T>(&mut self, outcome: Result<T, ClientError>) -> Result<T, ClientError> {
        match outcome {
            Ok(value) => {
                self.error = None;
                Ok(value)
            }
            Err(err) => {
                warn!(error = %err, "authentication request failed");
                self.error = Some(match &err {
                    ClientError::Api { message, .. } if !message.is_empty() => message.clone(),
                    ClientError::Api { .. } => AUTH_FAILED_MESSAGE.to_owned(),
                    _ => NETWORK_ERROR_MESSAGE.to_owned(),
                });
                Err(err)
            }
        }
    }
}
