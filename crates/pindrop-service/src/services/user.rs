//! User service
//!
//! Handles user profile operations.

use pindrop_core::entities::User;
use pindrop_core::error::DomainError;
use pindrop_core::UserId;
use tracing::{info, instrument};

use crate::dto::{DeletedUserResponse, UpdateUserRequest, UserResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// User service
pub struct UserService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UserService<'a> {
    /// Create a new UserService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    async fn find(&self, user_id: UserId) -> ServiceResult<User> {
        self.ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| DomainError::UserNotFound(user_id).into())
    }

    /// Get a live user by id
    #[instrument(skip(self))]
    pub async fn get_user(&self, user_id: UserId) -> ServiceResult<UserResponse> {
        let user = self.find(user_id).await?;
        Ok(UserResponse::from(&user))
    }

    /// Change the names of a user
    #[instrument(skip(self, request))]
    pub async fn update_user(
        &self,
        user_id: UserId,
        request: UpdateUserRequest,
    ) -> ServiceResult<UserResponse> {
        let mut user = self.find(user_id).await?;

        if !user.rename(request.first_name, request.last_name) {
            return Err(DomainError::NoChanges.into());
        }

        self.ctx.user_repo().update(&user).await?;
        info!(user_id = %user_id, "User profile updated");

        Ok(UserResponse::from(&user))
    }

    /// Soft delete an account and end all of its sessions
    #[instrument(skip(self))]
    pub async fn delete_user(&self, user_id: UserId) -> ServiceResult<DeletedUserResponse> {
        let user = self.find(user_id).await?;

        let sessions = self
            .ctx
            .session_store()
            .revoke_all_for_user(user_id)
            .await?;
        let deleted_at = self.ctx.user_repo().delete(user_id).await?;

        info!(user_id = %user_id, sessions, "User account deleted");

        Ok(DeletedUserResponse::new(&user, deleted_at))
    }
}
