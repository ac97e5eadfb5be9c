//! User handlers
//!
//! Endpoints for user profiles.

use axum::{extract::State, Json};
use pindrop_core::UserId;
use pindrop_service::dto::{DeletedUserResponse, UpdateUserRequest, UserResponse};
use pindrop_service::UserService;

use crate::extractors::{AuthUser, IdPath, ValidatedJson};
use crate::response::ApiResult;
use crate::state::AppState;

/// Get a user by ID
///
/// GET /users/{user_id}
pub async fn get_user(
    State(state): State<AppState>,
    _auth: AuthUser,
    IdPath(user_id): IdPath<UserId>,
) -> ApiResult<Json<UserResponse>> {
    let service = UserService::new(state.service_context());
    let response = service.get_user(user_id).await?;
    Ok(Json(response))
}

/// Update the current user
///
/// PATCH /users
pub async fn update_current_user(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<UpdateUserRequest>,
) -> ApiResult<Json<UserResponse>> {
    let service = UserService::new(state.service_context());
    let response = service.update_user(auth.user_id, request).await?;
    Ok(Json(response))
}

/// Delete the current user and end all of their sessions
///
/// DELETE /users
pub async fn delete_current_user(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<DeletedUserResponse>> {
    let service = UserService::new(state.service_context());
    let response = service.delete_user(auth.user_id).await?;
    Ok(Json(response))
}
