//! Update User Use Case
//!
//! Applies a full (PUT) or partial (PATCH) update to a user and announces it
//! on the `user_updated` signal.

use std::sync::Arc;

use crate::domain::gateways::UserRepository;
use crate::domain::models::user::{UpdateUserData, User};
use crate::domain::signals::{Signals, UserUpdated};
use crate::shared::errors::{DomainError, UseCaseError};

/// Use case for updating a user
pub struct UpdateUserUseCase {
    user_repository: Arc<dyn UserRepository>,
    signals: Arc<Signals>,
}

impl UpdateUserUseCase {
    #[must_use]
    pub fn new(user_repository: Arc<dyn UserRepository>, signals: Arc<Signals>) -> Self {
        Self {
            user_repository,
            signals,
        }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` if the user doesn't exist.
    /// Returns `UseCaseError::Domain` if the new username is already taken.
    /// Returns `UseCaseError::Repository` if the repository rejects the write,
    /// e.g. when another update claimed the username first.
    pub async fn execute(&self, username: &str, data: UpdateUserData) -> Result<User, UseCaseError> {
        tracing::info!(username, "Updating user");

        let not_found = || UseCaseError::NotFound {
            resource: "User".to_string(),
            id: username.to_string(),
        };

        let existing = self.user_repository.find_by_username(username).await?.ok_or_else(|| {
            tracing::warn!(username, "User not found for update");
            not_found()
        })?;

        if let Some(new_username) = data.username.as_deref() {
            if new_username != existing.username()
                && self
                    .user_repository
                    .exists_by_username(new_username, Some(*existing.id()))
                    .await?
            {
                tracing::warn!(username, new_username, "Cannot update: username already taken");
                return Err(DomainError::UsernameConflict(new_username.to_string()).into());
            }
        }

        let updated = existing.with_updates(data);
        let saved = self.user_repository.update(&updated).await?.ok_or_else(not_found)?;

        let receivers = self.signals.user_updated.send(&UserUpdated {
            user: saved.clone(),
            previous_username: username.to_string(),
        });

        tracing::info!(user_id = %saved.id(), username = saved.username(), receivers, "User updated successfully");
        Ok(saved)
    }
}
