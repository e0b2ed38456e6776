//! Signup and login credentials.
//!
//! Constructors validate raw request values before a handler reaches a
//! service, so services only ever see complete credentials.

use std::fmt;

use zeroize::Zeroizing;

/// Raised when a required credential field is absent or empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CredentialsValidationError {
    /// Email was missing or blank once trimmed.
    MissingEmail,
    /// Password was missing or empty.
    MissingPassword,
}

impl fmt::Display for CredentialsValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingEmail => f.write_str("email must not be empty"),
            Self::MissingPassword => f.write_str("password must not be empty"),
        }
    }
}

impl std::error::Error for CredentialsValidationError {}

fn require_email(email: Option<&str>) -> Result<String, CredentialsValidationError> {
    match email.map(str::trim) {
        Some(value) if !value.is_empty() => Ok(value.to_owned()),
        _ => Err(CredentialsValidationError::MissingEmail),
    }
}

fn require_password(
    password: Option<&str>,
) -> Result<Zeroizing<String>, CredentialsValidationError> {
    match password {
        Some(value) if !value.is_empty() => Ok(Zeroizing::new(value.to_owned())),
        _ => Err(CredentialsValidationError::MissingPassword),
    }
}

/// Validated login credentials.
///
/// ## Invariants
/// - `email` is trimmed and non-empty.
/// - `password` is non-empty and kept verbatim.
///
/// # Examples
/// ```
/// use taskplanner::domain::LoginCredentials;
///
/// let creds = LoginCredentials::try_from_parts(Some(" ada@example.com "), Some("pw"))
///     .expect("complete credentials");
/// assert_eq!(creds.email(), "ada@example.com");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginCredentials {
    email: String,
    password: Zeroizing<String>,
}

impl LoginCredentials {
    /// Validate raw request values.
    pub fn try_from_parts(
        email: Option<&str>,
        password: Option<&str>,
    ) -> Result<Self, CredentialsValidationError> {
        Ok(Self {
            email: require_email(email)?,
            password: require_password(password)?,
        })
    }

    /// Email used for the account lookup.
    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    /// Plain-text password supplied by the caller.
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}

/// Validated signup request.
///
/// The display name falls back to the email when absent or empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignupCredentials {
    login: LoginCredentials,
    name: String,
}

impl SignupCredentials {
    /// Validate raw request values.
    pub fn try_from_parts(
        email: Option<&str>,
        password: Option<&str>,
        name: Option<&str>,
    ) -> Result<Self, CredentialsValidationError> {
        let login = LoginCredentials::try_from_parts(email, password)?;
        let name = match name {
            Some(value) if !value.is_empty() => value.to_owned(),
            _ => login.email().to_owned(),
        };
        Ok(Self { login, name })
    }

    /// Email the account is registered under.
    pub fn email(&self) -> &str {
        self.login.email()
    }

    /// Plain-text password to hash.
    pub fn password(&self) -> &str {
        self.login.password()
    }

    /// Display name to store.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
