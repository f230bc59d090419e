//! Driven Adapters
//!
//! Implementations of gateway traits for external systems:
//! - User storage
//! - Configuration

pub mod config;
pub mod user_repository;

pub use config::AppConfig;
pub use user_repository::InMemoryUserRepository;
