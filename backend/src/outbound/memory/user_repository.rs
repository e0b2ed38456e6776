//! In-memory `users` collection.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::User;
use crate::domain::ports::{UserPersistenceError, UserRepository};

/// Accounts keyed by email, mirroring the unique email index.
#[derive(Debug, Default)]
pub struct MemoryUserRepository {
    by_email: RwLock<HashMap<String, User>>,
}

#[async_trait]
impl UserRepository for MemoryUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserPersistenceError> {
        Ok(self.by_email.read().await.get(email).cloned())
    }

    async fn insert(&self, user: &User) -> Result<(), UserPersistenceError> {
        let mut guard = self.by_email.write().await;
        if guard.contains_key(user.email()) {
            return Err(UserPersistenceError::duplicate_email(user.email()));
        }
        guard.insert(user.email().to_owned(), user.clone());
        Ok(())
    }
}
