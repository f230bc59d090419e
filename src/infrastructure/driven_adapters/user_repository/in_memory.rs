//! In-Memory User Repository Implementation
//!
//! Implements the UserRepository trait over a map guarded by an async lock.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::gateways::UserRepository;
use crate::domain::models::user::{is_valid_name, is_valid_username, CreateUserData, User, UserId};
use crate::infrastructure::driven_adapters::config::SeedUser;
use crate::shared::errors::RepositoryError;

/// In-memory implementation of UserRepository
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: RwLock<HashMap<UserId, User>>,
}

impl InMemoryUserRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository holding `users`
    #[must_use]
    pub fn with_users(users: impl IntoIterator<Item = User>) -> Self {
        Self {
            users: RwLock::new(users.into_iter().map(|user| (*user.id(), user)).collect()),
        }
    }

    /// Create a repository from configured seed users
    ///
    /// Entries that break the username or name rules are skipped, as are
    /// later entries with an already seen username.
    #[must_use]
    pub fn from_seed(seed: &[SeedUser]) -> Self {
        let mut users: Vec<User> = Vec::with_capacity(seed.len());
        for entry in seed {
            if !is_valid_username(&entry.username) || !is_valid_name(&entry.name) {
                tracing::warn!(username = %entry.username, "Skipping invalid seed user");
                continue;
            }
            if users.iter().any(|u| u.username() == entry.username) {
                tracing::warn!(username = %entry.username, "Skipping duplicate seed user");
                continue;
            }
            users.push(User::new(CreateUserData {
                username: entry.username.clone(),
                name: entry.name.clone(),
            }));
        }
        tracing::info!(count = users.len(), "Seeded user directory");
        Self::with_users(users)
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepositoryError> {
        let users = self.users.read().await;
        Ok(users.values().find(|u| u.username() == username).cloned())
    }

    async fn find_all(&self) -> Result<Vec<User>, RepositoryError> {
        let users = self.users.read().await;
        let mut all: Vec<User> = users.values().cloned().collect();
        all.sort_by(|a, b| a.username().cmp(b.username()));
        Ok(all)
    }

    async fn update(&self, user: &User) -> Result<Option<User>, RepositoryError> {
        let mut users = self.users.write().await;
        if users
            .values()
            .any(|u| u.username() == user.username() && u.id() != user.id())
        {
            return Err(RepositoryError::UsernameTaken(user.username().to_string()));
        }
        match users.get_mut(user.id()) {
            Some(stored) => {
                *stored = user.clone();
                Ok(Some(user.clone()))
            }
            None => Ok(None),
        }
    }

    async fn exists_by_username(&self, username: &str, exclude_id: Option<UserId>) -> Result<bool, RepositoryError> {
        let users = self.users.read().await;
        Ok(users
            .values()
            .any(|u| u.username() == username && Some(*u.id()) != exclude_id))
    }
}
