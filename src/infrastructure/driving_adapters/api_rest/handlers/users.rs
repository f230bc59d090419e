//! User Handlers
//!
//! HTTP handlers for the `users` resource: list, retrieve, update and
//! partial update, looked up by username.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    routing::get,
    Json,
};
use validator::Validate;

use crate::infrastructure::driving_adapters::api_rest::dto::user::{
    PatchUserDto, UpdateUserDto, UserResponseDto,
};
use crate::infrastructure::driving_adapters::api_rest::router::ViewSet;
use crate::infrastructure::driving_adapters::api_rest::AppState;
use crate::shared::errors::ApiError;

/// The users viewset, registered under the `users` prefix
pub fn viewset() -> ViewSet {
    ViewSet::new(
        "user",
        "username",
        get(list_users),
        get(get_user).put(update_user).patch(partial_update_user),
    )
}

/// GET /users/ - List users
///
/// # Responses
///
/// * 200 OK - Users sorted by username
#[axum::debug_handler]
async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<UserResponseDto>>, ApiError> {
    let users = state.list_users_use_case.execute().await?;

    let response = users
        .iter()
        .map(|user| UserResponseDto::from_user(user, &state.routes))
        .collect();
    Ok(Json(response))
}

/// GET /users/{username}/ - Get a user
///
/// # Responses
///
/// * 200 OK - User found
/// * 404 Not Found - No user with this username
#[axum::debug_handler]
async fn get_user(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<Json<UserResponseDto>, ApiError> {
    let user = state.get_user_use_case.execute(&username).await?;
    Ok(Json(UserResponseDto::from_user(&user, &state.routes)))
}

/// PUT /users/{username}/ - Full update of a user
///
/// # Responses
///
/// * 200 OK - User updated
/// * 400 Bad Request - Malformed body or validation error
/// * 404 Not Found - No user with this username
/// * 409 Conflict - New username already taken
#[axum::debug_handler]
async fn update_user(
    State(state): State<AppState>,
    Path(username): Path<String>,
    payload: Result<Json<UpdateUserDto>, JsonRejection>,
) -> Result<Json<UserResponseDto>, ApiError> {
    let Json(dto) = payload?;
    dto.validate()?;

    let user = state.update_user_use_case.execute(&username, dto.into()).await?;
    Ok(Json(UserResponseDto::from_user(&user, &state.routes)))
}

/// PATCH /users/{username}/ - Partial update of a user
///
/// # Responses
///
/// * 200 OK - User updated
/// * 400 Bad Request - Malformed body or validation error
/// * 404 Not Found - No user with this username
/// * 409 Conflict - New username already taken
#[axum::debug_handler]
async fn partial_update_user(
    State(state): State<AppState>,
    Path(username): Path<String>,
    payload: Result<Json<PatchUserDto>, JsonRejection>,
) -> Result<Json<UserResponseDto>, ApiError> {
    let Json(dto) = payload?;
    dto.validate()?;

    let user = state.update_user_use_case.execute(&username, dto.into()).await?;
    Ok(Json(UserResponseDto::from_user(&user, &state.routes)))
}
