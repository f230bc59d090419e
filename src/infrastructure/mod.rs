//! Infrastructure Layer
//!
//! Contains all external concerns: driving adapters (HTTP router and handlers)
//! and driven adapters (configuration, user storage).

pub mod driven_adapters;
pub mod driving_adapters;
