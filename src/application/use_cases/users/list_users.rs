//! List Users Use Case

use std::sync::Arc;

use crate::domain::gateways::UserRepository;
use crate::domain::models::user::User;
use crate::shared::errors::UseCaseError;

/// Use case for listing all users
pub struct ListUsersUseCase {
    user_repository: Arc<dyn UserRepository>,
}

impl ListUsersUseCase {
    #[must_use]
    pub fn new(user_repository: Arc<dyn UserRepository>) -> Self {
        Self { user_repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Repository` if the repository fails.
    pub async fn execute(&self) -> Result<Vec<User>, UseCaseError> {
        let users = self.user_repository.find_all().await?;
        tracing::debug!(count = users.len(), "Listed users");
        Ok(users)
    }
}
