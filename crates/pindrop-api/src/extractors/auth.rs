//! Authentication extractor
//!
//! Extracts the bearer token from the Authorization header and accepts it
//! only while the session it names is live.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use pindrop_core::UserId;
use pindrop_service::{AuthService, AuthSession};

use crate::response::ApiError;
use crate::state::AppState;

/// Authenticated user extracted from an access token
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// User ID from the token subject
    pub user_id: UserId,
    /// Session the token was issued for
    pub session_id: String,
}

impl AuthUser {
    /// The session this request was authenticated with
    #[must_use]
    pub fn session(&self) -> AuthSession {
        AuthSession {
            user_id: self.user_id,
            session_id: self.session_id.clone(),
        }
    }
}

impl From<AuthSession> for AuthUser {
    fn from(session: AuthSession) -> Self {
        Self {
            user_id: session.user_id,
            session_id: session.session_id,
        }
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|_| ApiError::MissingAuth)?;

        let app_state = AppState::from_ref(state);

        let session = AuthService::new(app_state.service_context())
            .authenticate(bearer.token())
            .await
            .map_err(|e| {
                tracing::warn!(error = %e, "Rejected access token");
                ApiError::from(e)
            })?;

        Ok(AuthUser::from(session))
    }
}
