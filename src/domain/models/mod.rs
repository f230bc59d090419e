//! Domain Models
//!
//! Pure domain entities and value objects representing business concepts.

pub mod user;

pub use user::{CreateUserData, UpdateUserData, User, UserId};
