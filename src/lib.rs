//! Demo App API
//!
//! A user directory service. At startup the API router is built from the
//! debug flag and the installed application units are brought up through
//! their ready hooks, following Clean/Hexagonal Architecture principles.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod shared;
pub mod users;
