//! API Root Handler
//!
//! Browsable index of the registered resources. Only mounted by the
//! `Default` router strategy.

use std::collections::BTreeMap;

use axum::{extract::State, Json};

use crate::infrastructure::driving_adapters::api_rest::AppState;

/// GET / - Map of resource prefix to list URL
pub async fn api_root(State(state): State<AppState>) -> Json<BTreeMap<String, String>> {
    Json(state.routes.root_listing())
}
