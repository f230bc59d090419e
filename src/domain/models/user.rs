//! User Domain Model
//!
//! Represents a user account in the directory.

use chrono::{DateTime, Utc};
use lazy_static::lazy_static;
use regex::Regex;
use uuid::Uuid;

pub const USERNAME_MAX_LENGTH: usize = 150;
pub const NAME_MAX_LENGTH: usize = 255;

lazy_static! {
    /// Letters, digits and @/./+/-/_ only
    static ref USERNAME_REGEX: Regex = Regex::new(r"^[\w.@+-]+$").expect("valid regex");
}

/// Whether `username` fits the username length and character rules
#[must_use]
pub fn is_valid_username(username: &str) -> bool {
    username.chars().count() <= USERNAME_MAX_LENGTH && USERNAME_REGEX.is_match(username)
}

/// Whether `name` fits the display name length rule
#[must_use]
pub fn is_valid_name(name: &str) -> bool {
    name.chars().count() <= NAME_MAX_LENGTH
}

/// Newtype wrapper for User ID providing type safety
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserId(Uuid);

impl UserId {
    /// Create a new random UserId
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Data required to create a new User
#[derive(Debug, Clone)]
pub struct CreateUserData {
    pub username: String,
    pub name: String,
}

/// Data for updating an existing User (all fields optional for partial updates)
#[derive(Debug, Clone, Default)]
pub struct UpdateUserData {
    pub username: Option<String>,
    pub name: Option<String>,
}

/// User domain entity
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    id: UserId,
    username: String,
    name: String,
    date_joined: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl User {
    #[must_use]
    pub fn new(data: CreateUserData) -> Self {
        let now = Utc::now();
        Self {
            id: UserId::new(),
            username: data.username,
            name: data.name,
            date_joined: now,
            updated_at: now,
        }
    }

    /// Apply updates to the user, returning a new instance
    #[must_use]
    pub fn with_updates(self, data: UpdateUserData) -> Self {
        Self {
            username: data.username.unwrap_or(self.username),
            name: data.name.unwrap_or(self.name),
            updated_at: Utc::now(),
            ..self
        }
    }

    #[must_use]
    pub fn id(&self) -> &UserId {
        &self.id
    }

    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn date_joined(&self) -> DateTime<Utc> {
        self.date_joined
    }

    #[must_use]
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}
