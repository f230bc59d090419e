//! Get User Use Case
//!
//! Retrieves a single user by username.

use std::sync::Arc;

use crate::domain::gateways::UserRepository;
use crate::domain::models::user::User;
use crate::shared::errors::UseCaseError;

/// Use case for getting a user by username
pub struct GetUserUseCase {
    user_repository: Arc<dyn UserRepository>,
}

impl GetUserUseCase {
    #[must_use]
    pub fn new(user_repository: Arc<dyn UserRepository>) -> Self {
        Self { user_repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` if no user has this username.
    /// Returns `UseCaseError::Repository` if the repository fails.
    pub async fn execute(&self, username: &str) -> Result<User, UseCaseError> {
        tracing::debug!(username, "Getting user by username");

        self.user_repository.find_by_username(username).await?.ok_or_else(|| {
            tracing::warn!(username, "User not found");
            UseCaseError::NotFound {
                resource: "User".to_string(),
                id: username.to_string(),
            }
        })
    }
}
