//! API Router
//!
//! Resource routing for the `api` namespace. A router is built from one of two
//! strategies and each viewset is registered under a URL prefix:
//!
//! - `Default` serves a browsable API root at `{mount}/` listing every resource
//! - `Simple` serves only the resource routes
//!
//! Every registration contributes a list route `{mount}/{prefix}/` and a detail
//! route `{mount}/{prefix}/{lookup}/`.

use std::collections::BTreeMap;

use axum::routing::{get, MethodRouter};
use axum::Router;

use crate::infrastructure::driven_adapters::config::AppConfig;
use crate::infrastructure::driving_adapters::api_rest::handlers::api_root;
use crate::infrastructure::driving_adapters::api_rest::AppState;

/// Namespace label under which the API routes are composed
pub const APP_NAME: &str = "api";

const ROOT_ROUTE_NAME: &str = "api-root";

/// Normalise a mount prefix to `/segment[/segment]` form
///
/// A missing leading slash is added and trailing slashes are dropped, so
/// `api`, `/api` and `/api/` all mount at `/api`. An empty or `/` prefix
/// mounts at the host root.
#[must_use]
pub fn normalize_mount(mount: &str) -> String {
    let trimmed = mount.trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{trimmed}")
    }
}

/// Routing strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouterStrategy {
    /// Resource routes plus a browsable API root index
    Default,
    /// Resource routes only
    Simple,
}

impl RouterStrategy {
    /// Pick the strategy for the given debug flag
    #[must_use]
    pub fn from_debug(debug: bool) -> Self {
        if debug {
            Self::Default
        } else {
            Self::Simple
        }
    }

    #[must_use]
    pub fn includes_root_view(self) -> bool {
        matches!(self, Self::Default)
    }
}

/// List and detail handlers for one resource
pub struct ViewSet {
    basename: &'static str,
    lookup_field: &'static str,
    list: MethodRouter<AppState>,
    detail: MethodRouter<AppState>,
}

impl ViewSet {
    #[must_use]
    pub fn new(
        basename: &'static str,
        lookup_field: &'static str,
        list: MethodRouter<AppState>,
        detail: MethodRouter<AppState>,
    ) -> Self {
        Self {
            basename,
            lookup_field,
            list,
            detail,
        }
    }
}

struct Registration {
    prefix: String,
    viewset: ViewSet,
}

/// Builder for the `api` namespace routes
pub struct ApiRouter {
    strategy: RouterStrategy,
    registry: Vec<Registration>,
}

impl ApiRouter {
    #[must_use]
    pub fn new(strategy: RouterStrategy) -> Self {
        Self {
            strategy,
            registry: Vec::new(),
        }
    }

    /// Create a router whose strategy follows `config.debug`
    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        let strategy = RouterStrategy::from_debug(config.debug);
        tracing::debug!(?strategy, debug = config.debug, "Selected API router strategy");
        Self::new(strategy)
    }

    #[must_use]
    pub fn strategy(&self) -> RouterStrategy {
        self.strategy
    }

    /// Register `viewset` under the URL segment `prefix`
    pub fn register(&mut self, prefix: impl Into<String>, viewset: ViewSet) -> &mut Self {
        let prefix = prefix.into();
        tracing::debug!(prefix = %prefix, basename = viewset.basename, "Registered viewset");
        self.registry.push(Registration { prefix, viewset });
        self
    }

    /// Describe every route this router serves under `mount`
    #[must_use]
    pub fn route_table(&self, mount: &str) -> RouteTable {
        let mount = normalize_mount(mount);
        RouteTable {
            namespace: APP_NAME,
            root: self.strategy.includes_root_view().then(|| format!("{mount}/")),
            resources: self
                .registry
                .iter()
                .map(|r| ResourceRoute {
                    prefix: r.prefix.clone(),
                    basename: r.viewset.basename.to_string(),
                    lookup_field: r.viewset.lookup_field.to_string(),
                    list_path: format!("{mount}/{}/", r.prefix),
                    detail_path: format!("{mount}/{}/{{{}}}/", r.prefix, r.viewset.lookup_field),
                })
                .collect(),
        }
    }

    /// Build the axum router serving every registered route under `mount`
    #[must_use]
    pub fn into_router(self, mount: &str) -> Router<AppState> {
        let table = self.route_table(mount);
        let mut router = Router::new();

        if let Some(root) = &table.root {
            router = router.route(root, get(api_root::api_root));
        }

        for (registration, route) in self.registry.into_iter().zip(&table.resources) {
            router = router
                .route(&route.list_path, registration.viewset.list)
                .route(&route.detail_path, registration.viewset.detail);
        }

        router
    }
}

/// A registered resource and its concrete paths
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceRoute {
    pub prefix: String,
    pub basename: String,
    pub lookup_field: String,
    pub list_path: String,
    pub detail_path: String,
}

/// Inspectable description of the `api` namespace
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteTable {
    pub namespace: &'static str,
    /// Path of the API root index, present only for the `Default` strategy
    pub root: Option<String>,
    pub resources: Vec<ResourceRoute>,
}

impl RouteTable {
    #[must_use]
    pub fn has_root_view(&self) -> bool {
        self.root.is_some()
    }

    /// Registrations whose prefix is `prefix`
    pub fn resources_for<'a>(&'a self, prefix: &'a str) -> impl Iterator<Item = &'a ResourceRoute> + 'a {
        self.resources.iter().filter(move |r| r.prefix == prefix)
    }

    /// Map of each prefix to its list URL, as served by the API root
    #[must_use]
    pub fn root_listing(&self) -> BTreeMap<String, String> {
        self.resources
            .iter()
            .map(|r| (r.prefix.clone(), r.list_path.clone()))
            .collect()
    }

    /// Resolve a namespaced route name to a path
    ///
    /// Names are `api:api-root`, `api:{basename}-list` and
    /// `api:{basename}-detail`; the detail route takes the lookup value as its
    /// single argument. Returns `None` for unknown names or wrong arguments.
    #[must_use]
    pub fn reverse(&self, name: &str, args: &[&str]) -> Option<String> {
        let route_name = name.strip_prefix(self.namespace)?.strip_prefix(':')?;

        if route_name == ROOT_ROUTE_NAME {
            return if args.is_empty() { self.root.clone() } else { None };
        }

        self.resources.iter().find_map(|r| {
            let kind = route_name.strip_prefix(r.basename.as_str())?.strip_prefix('-')?;
            match (kind, args) {
                ("list", []) => Some(r.list_path.clone()),
                ("detail", [value]) => Some(
                    r.detail_path
                        .replace(&format!("{{{}}}", r.lookup_field), value),
                ),
                _ => None,
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    fn viewset() -> ViewSet {
        ViewSet::new(
            "user",
            "username",
            get(|| async { StatusCode::OK }),
            get(|| async { StatusCode::OK }),
        )
    }

    fn table(debug: bool) -> RouteTable {
        let mut router = ApiRouter::new(RouterStrategy::from_debug(debug));
        router.register("users", viewset());
        router.route_table("/api")
    }

    #[test]
    fn test_strategy_follows_debug_flag() {
        assert_eq!(RouterStrategy::from_debug(true), RouterStrategy::Default);
        assert_eq!(RouterStrategy::from_debug(false), RouterStrategy::Simple);
    }

    #[test]
    fn test_debug_includes_root_view() {
        let table = table(true);
        assert!(table.has_root_view());
        assert_eq!(table.root.as_deref(), Some("/api/"));
    }

    #[test]
    fn test_non_debug_omits_root_view() {
        let table = table(false);
        assert!(!table.has_root_view());
        assert_eq!(table.reverse("api:api-root", &[]), None);
    }

    #[test]
    fn test_users_registered_exactly_once() {
        for debug in [true, false] {
            let table = table(debug);
            assert_eq!(table.namespace, "api");
            assert_eq!(table.resources_for("users").count(), 1);

            let users = &table.resources[0];
            assert_eq!(users.list_path, "/api/users/");
            assert_eq!(users.detail_path, "/api/users/{username}/");
        }
    }

    #[test]
    fn test_reverse() {
        let table = table(true);

        assert_eq!(table.reverse("api:api-root", &[]).as_deref(), Some("/api/"));
        assert_eq!(table.reverse("api:user-list", &[]).as_deref(), Some("/api/users/"));
        assert_eq!(
            table.reverse("api:user-detail", &["alice"]).as_deref(),
            Some("/api/users/alice/")
        );
        assert_eq!(table.reverse("api:user-detail", &[]), None);
        assert_eq!(table.reverse("user-list", &[]), None);
        assert_eq!(table.reverse("api:group-list", &[]), None);
    }

    #[test]
    fn test_normalize_mount() {
        assert_eq!(normalize_mount("/api"), "/api");
        assert_eq!(normalize_mount("api"), "/api");
        assert_eq!(normalize_mount("api/"), "/api");
        assert_eq!(normalize_mount("/v1/api/"), "/v1/api");
        assert_eq!(normalize_mount("/"), "");
        assert_eq!(normalize_mount(""), "");
    }

    #[test]
    fn test_mount_without_leading_slash() {
        let mut router = ApiRouter::new(RouterStrategy::Default);
        router.register("users", viewset());
        let table = router.route_table("api");

        assert_eq!(table.root.as_deref(), Some("/api/"));
        assert_eq!(table.resources[0].list_path, "/api/users/");
        assert_eq!(table.resources[0].detail_path, "/api/users/{username}/");
    }

    #[test]
    fn test_empty_mount_serves_from_host_root() {
        let mut router = ApiRouter::new(RouterStrategy::Default);
        router.register("users", viewset());
        let table = router.route_table("/");

        assert_eq!(table.root.as_deref(), Some("/"));
        assert_eq!(table.reverse("api:user-detail", &["alice"]).as_deref(), Some("/users/alice/"));
    }

    #[test]
    fn test_mount_trailing_slash_is_ignored() {
        let mut router = ApiRouter::new(RouterStrategy::Default);
        router.register("users", viewset());
        let table = router.route_table("/v1/");

        assert_eq!(table.root.as_deref(), Some("/v1/"));
        assert_eq!(table.root_listing().get("users").map(String::as_str), Some("/v1/users/"));
    }
}
