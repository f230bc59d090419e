//! REST API Module
//!
//! Contains the API router, HTTP handlers and DTOs for the REST API.

pub mod dto;
pub mod handlers;
pub mod router;

use std::sync::Arc;

use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::application::use_cases::users::{GetUserUseCase, ListUsersUseCase, UpdateUserUseCase};
use crate::domain::gateways::UserRepository;
use crate::domain::signals::Signals;
use crate::infrastructure::driven_adapters::config::AppConfig;

pub use router::{normalize_mount, ApiRouter, RouteTable, RouterStrategy, ViewSet, APP_NAME};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub routes: Arc<RouteTable>,
    pub list_users_use_case: Arc<ListUsersUseCase>,
    pub get_user_use_case: Arc<GetUserUseCase>,
    pub update_user_use_case: Arc<UpdateUserUseCase>,
}

/// The `api` namespace routes for this configuration
#[must_use]
pub fn api_router(config: &AppConfig) -> ApiRouter {
    let mut router = ApiRouter::from_config(config);
    router.register("users", handlers::users::viewset());
    router
}

/// Build the HTTP application with its middleware and state
#[must_use]
pub fn build_app(config: &AppConfig, user_repository: Arc<dyn UserRepository>, signals: Arc<Signals>) -> Router {
    let api = api_router(config);
    let mount = normalize_mount(&config.server.api_prefix);
    let routes = Arc::new(api.route_table(&mount));

    tracing::info!(
        namespace = routes.namespace,
        strategy = ?api.strategy(),
        mount = %mount,
        root_view = routes.has_root_view(),
        resources = routes.resources.len(),
        "API routes registered"
    );

    let state = AppState {
        routes,
        list_users_use_case: Arc::new(ListUsersUseCase::new(user_repository.clone())),
        get_user_use_case: Arc::new(GetUserUseCase::new(user_repository.clone())),
        update_user_use_case: Arc::new(UpdateUserUseCase::new(user_repository, signals)),
    };

    api.into_router(&mount)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
