//! User entity <-> model mapper

use pindrop_core::entities::User;
use pindrop_core::value_objects::UserId;

use crate::models::UserModel;

/// Convert UserModel to User entity
impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User {
            id: UserId::new(model.id),
            first_name: model.first_name,
            last_name: model.last_name,
            phone_num: model.phone_num,
            email: model.email,
            created_at: model.created_at,
            deleted_at: model.deleted_at,
        }
    }
}
