//! Authentication handlers
//!
//! Endpoints for account registration, login and logout.

use axum::{extract::State, Json};
use pindrop_common::AccessToken;
use pindrop_service::dto::{CreateUserRequest, LoginRequest, LogoutResponse, UserResponse};
use pindrop_service::AuthService;

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Create an account
///
/// POST /users
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateUserRequest>,
) -> ApiResult<Created<Json<UserResponse>>> {
    let service = AuthService::new(state.service_context());
    let response = service.register(request).await?;
    Ok(Created(Json(response)))
}

/// Login with email and password
///
/// POST /users/token
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> ApiResult<Json<AccessToken>> {
    let service = AuthService::new(state.service_context());
    let token = service.login(request).await?;
    Ok(Json(token))
}

/// End the session of the presented token
///
/// DELETE /users/token
pub async fn logout(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<LogoutResponse>> {
    let service = AuthService::new(state.service_context());
    let response = service.logout(&auth.session()).await?;
    Ok(Json(response))
}
