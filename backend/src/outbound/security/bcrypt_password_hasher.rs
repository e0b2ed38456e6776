//! `PasswordHasher` adapter over bcrypt.
//!
//! bcrypt is deliberately slow, so both operations run on tokio's blocking
//! pool.

use async_trait::async_trait;
use tracing::warn;
use zeroize::Zeroizing;

use crate::domain::PasswordHash;
use crate::domain::ports::{PasswordHashError, PasswordHasher};

/// Work factor used for new hashes.
pub const DEFAULT_COST: u32 = 10;

/// bcrypt-backed password hasher.
#[derive(Debug, Clone, Copy)]
pub struct BcryptPasswordHasher {
    cost: u32,
}

impl BcryptPasswordHasher {
    /// Hasher with an explicit work factor (4..=31).
    pub fn with_cost(cost: u32) -> Self {
        Self { cost }
    }
}

impl Default for BcryptPasswordHasher {
    fn default() -> Self {
        Self::with_cost(DEFAULT_COST)
    }
}

#[async_trait]
impl PasswordHasher for BcryptPasswordHasher {
    async fn hash(&self, password: &str) -> Result<PasswordHash, PasswordHashError> {
        let password = Zeroizing::new(password.to_owned());
        let cost = self.cost;
        let encoded = tokio::task::spawn_blocking(move || bcrypt::hash(password.as_str(), cost))
            .await
            .map_err(|err| PasswordHashError::hashing(err.to_string()))?
            .map_err(|err| PasswordHashError::hashing(err.to_string()))?;
        Ok(PasswordHash::new(encoded))
    }

    async fn verify(
        &self,
        password: &str,
        hash: &PasswordHash,
    ) -> Result<bool, PasswordHashError> {
        let password = Zeroizing::new(password.to_owned());
        let encoded = hash.as_str().to_owned();
        let outcome =
            tokio::task::spawn_blocking(move || bcrypt::verify(password.as_str(), &encoded))
                .await
                .map_err(|err| PasswordHashError::hashing(err.to_string()))?;
        match outcome {
            Ok(matches) => Ok(matches),
            Err(err) => {
                warn!(error = %err, "stored password hash could not be parsed");
                Ok(false)
            }
        }
    }
}
