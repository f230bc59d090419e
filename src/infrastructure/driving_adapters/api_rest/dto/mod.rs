//! Data Transfer Objects
//!
//! Request and response DTOs for the REST API.

pub mod user;

pub use user::{PatchUserDto, UpdateUserDto, UserResponseDto};
