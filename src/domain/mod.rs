//! Domain Layer
//!
//! Contains the core business logic, domain models, gateway traits (ports)
//! and the signals that announce domain events.
//! This layer has no dependencies on infrastructure.

pub mod gateways;
pub mod models;
pub mod signals;

pub use gateways::user_repository::UserRepository;
pub use models::user::{CreateUserData, UpdateUserData, User, UserId};
pub use signals::{Signal, Signals, UserUpdated};
