//! Driving Adapters
//!
//! Entry points that drive the application:
//! - HTTP REST API router and handlers
//! - DTOs for request/response

pub mod api_rest;
