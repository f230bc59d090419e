//! HTTP Handlers

pub mod api_root;
pub mod users;
