//! User Repository Gateway
//!
//! Abstract trait defining the contract for user persistence operations.

use async_trait::async_trait;

use crate::domain::models::user::{User, UserId};
use crate::shared::errors::RepositoryError;

/// Repository trait for User persistence operations
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by username
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepositoryError>;

    /// Find all users, sorted by username ascending
    async fn find_all(&self) -> Result<Vec<User>, RepositoryError>;

    /// Update an existing user, returning `None` if it no longer exists
    async fn update(&self, user: &User) -> Result<Option<User>, RepositoryError>;

    /// Check if a username is taken, optionally excluding a specific user ID
    async fn exists_by_username(&self, username: &str, exclude_id: Option<UserId>) -> Result<bool, RepositoryError>;
}
