//! Application Layer
//!
//! Contains use cases that orchestrate business logic and the lifecycle
//! machinery that brings installed application units up at startup.
//! Use cases depend on domain gateways (abstractions), not concrete implementations.

pub mod lifecycle;
pub mod use_cases;
