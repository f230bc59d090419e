//! User DTOs
//!
//! Data transfer objects for user API endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::models::user::{is_valid_username, UpdateUserData, User};
use crate::infrastructure::driving_adapters::api_rest::router::RouteTable;

/// Validates the username character set
fn validate_username(username: &str) -> Result<(), validator::ValidationError> {
    if is_valid_username(username) {
        Ok(())
    } else {
        let mut error = validator::ValidationError::new("username");
        error.message = Some("Enter a valid username. It may contain only letters, numbers, and @/./+/-/_ characters".into());
        Err(error)
    }
}

/// DTO for full user update (PUT)
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateUserDto {
    #[validate(length(min = 1, max = 150, message = "username must be between 1 and 150 characters"))]
    #[validate(custom(function = "validate_username"))]
    pub username: String,

    #[validate(length(max = 255, message = "name must be at most 255 characters"))]
    pub name: String,
}

impl From<UpdateUserDto> for UpdateUserData {
    fn from(dto: UpdateUserDto) -> Self {
        Self {
            username: Some(dto.username),
            name: Some(dto.name),
        }
    }
}

/// DTO for partial user update (PATCH)
///
/// Only provided fields are updated.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct PatchUserDto {
    #[validate(length(min = 1, max = 150, message = "username must be between 1 and 150 characters"))]
    #[validate(custom(function = "validate_username"))]
    pub username: Option<String>,

    #[validate(length(max = 255, message = "name must be at most 255 characters"))]
    pub name: Option<String>,
}

impl From<PatchUserDto> for UpdateUserData {
    fn from(dto: PatchUserDto) -> Self {
        Self {
            username: dto.username,
            name: dto.name,
        }
    }
}

/// User response DTO
#[derive(Debug, Clone, Serialize)]
pub struct UserResponseDto {
    pub username: String,
    pub name: String,
    pub url: String,
}

impl UserResponseDto {
    /// Build the response, reversing the detail URL from `routes`
    #[must_use]
    pub fn from_user(user: &User, routes: &RouteTable) -> Self {
        let url = routes
            .reverse("api:user-detail", &[user.username()])
            .unwrap_or_default();
        Self {
            username: user.username().to_string(),
            name: user.name().to_string(),
            url,
        }
    }
}
