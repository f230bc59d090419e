//! Common test utilities for e2e tests
//!
//! Builds the full application from a TOML configuration with a seeded
//! in-memory user directory, and helpers to drive it with single requests.

#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde::{Deserialize, Serialize};
use tower::util::ServiceExt;

use demo_app::domain::signals::Signals;
use demo_app::infrastructure::driven_adapters::config::AppConfig;
use demo_app::infrastructure::driven_adapters::user_repository::InMemoryUserRepository;
use demo_app::infrastructure::driving_adapters::api_rest::build_app;

/// Test application context
pub struct TestApp {
    pub router: Router,
    pub signals: Arc<Signals>,
}

impl TestApp {
    /// Create a test application with `alice` and `bob` seeded
    pub fn new(debug: bool) -> Self {
        Self::with_config(create_test_config(debug, "/api"))
    }

    /// Create a test application from `config`
    pub fn with_config(config: AppConfig) -> Self {
        let signals = Arc::new(Signals::new());
        let user_repository = Arc::new(InMemoryUserRepository::from_seed(&config.users));

        let router = build_app(&config, user_repository, signals.clone());

        Self { router, signals }
    }

    /// Send a request with an optional JSON body
    pub async fn request(&self, method: Method, uri: &str, body: Option<String>) -> (StatusCode, Vec<u8>) {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(json) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(json)
            }
            None => Body::empty(),
        };

        let response = self
            .router
            .clone()
            .oneshot(builder.body(body).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, bytes.to_vec())
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Vec<u8>) {
        self.request(Method::GET, uri, None).await
    }
}

/// Create a test configuration
pub fn create_test_config(debug: bool, api_prefix: &str) -> AppConfig {
    let config_str = format!(
        r#"
debug = {debug}

[server]
host = "127.0.0.1"
port = 0
api_prefix = "{api_prefix}"

[[users]]
username = "bob"
name = "Bob"

[[users]]
username = "alice"
name = "Alice"
"#
    );

    AppConfig::from_toml(&config_str).expect("Failed to build test config")
}

/// Helper struct for partial update request bodies
#[derive(Debug, Default, Serialize)]
pub struct PatchUserRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// User response structure for deserialization
#[derive(Debug, Deserialize)]
pub struct UserResponse {
    pub username: String,
    pub name: String,
    pub url: String,
}

/// Error response structure for deserialization
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
    pub timestamp: String,
}

#[derive(Debug, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    pub details: Option<Vec<FieldError>>,
}

#[derive(Debug, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}
