//! User database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for users table (password hash excluded)
#[derive(Debug, Clone, FromRow)]
pub struct UserModel {
    pub id: i64,
    pub created_at: DateTime<Utc>,
    pub first_name: String,
    pub last_name: String,
    pub phone_num: String,
    pub email: String,
    pub deleted_at: Option<DateTime<Utc>>,
}
