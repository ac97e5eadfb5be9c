//! Authentication service
//!
//! Handles account creation, login, logout and access token checks.

use pindrop_common::auth::{
    hash_password, validate_password_strength, verify_or_reject, AccessToken,
};
use pindrop_common::AppError;
use pindrop_core::entities::NewUser;
use pindrop_core::error::DomainError;
use pindrop_core::UserId;
use tracing::{info, instrument, warn};

use crate::dto::{CreateUserRequest, LoginRequest, LogoutResponse, UserResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Principal behind an accepted access token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthSession {
    pub user_id: UserId,
    pub session_id: String,
}

/// Authentication service
pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create an account
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn register(&self, request: CreateUserRequest) -> ServiceResult<UserResponse> {
        validate_password_strength(&request.password)?;

        if self.ctx.user_repo().email_exists(&request.email).await? {
            return Err(DomainError::EmailAlreadyExists.into());
        }

        let password_hash = hash_password(&request.password)?;

        let new_user = NewUser {
            first_name: request.first_name,
            last_name: request.last_name,
            phone_num: request.phone_num,
            email: request.email,
        };
        let user = self.ctx.user_repo().create(&new_user, &password_hash).await?;

        info!(user_id = %user.id, "User registered successfully");

        Ok(UserResponse::from(&user))
    }

    /// Check credentials and open a new session
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn login(&self, request: LoginRequest) -> ServiceResult<AccessToken> {
        let Some(user) = self.ctx.user_repo().find_by_email(&request.email).await? else {
            warn!("Login failed: unknown email");
            return Err(DomainError::InvalidCredentials.into());
        };

        let Some(password_hash) = self.ctx.user_repo().get_password_hash(user.id).await? else {
            warn!(user_id = %user.id, "Login failed: no password hash");
            return Err(DomainError::InvalidCredentials.into());
        };

        if let Err(e) = verify_or_reject(&request.password, &password_hash) {
            warn!(user_id = %user.id, "Login failed: invalid password");
            return Err(e.into());
        }

        let session_id = self.ctx.session_store().create(user.id).await?;
        let token = self.ctx.jwt_service().issue(user.id, &session_id)?;

        info!(user_id = %user.id, "User logged in successfully");

        Ok(token)
    }

    /// End the session the request was authenticated with
    #[instrument(skip(self, session), fields(user_id = %session.user_id))]
    pub async fn logout(&self, session: &AuthSession) -> ServiceResult<LogoutResponse> {
        self.ctx
            .session_store()
            .revoke(&session.session_id)
            .await?;

        info!("User logged out successfully");
        Ok(LogoutResponse::terminated())
    }

    /// Accept an access token only while its user and session are live
    #[instrument(skip(self, token))]
    pub async fn authenticate(&self, token: &str) -> ServiceResult<AuthSession> {
        let claims = self.ctx.jwt_service().validate_access_token(token)?;
        let user_id = claims.user_id()?;

        if self.ctx.user_repo().find_by_id(user_id).await?.is_none() {
            warn!(user_id = %user_id, "Token of a deleted or unknown user");
            return Err(AppError::InvalidToken.into());
        }

        if !self
            .ctx
            .session_store()
            .is_active(&claims.sid, user_id)
            .await?
        {
            return Err(AppError::SessionInactive.into());
        }

        Ok(AuthSession {
            user_id,
            session_id: claims.sid,
        })
    }
}
