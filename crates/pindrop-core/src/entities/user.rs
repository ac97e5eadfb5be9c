//! User entity - an account that files reports and votes on them

use chrono::{DateTime, Utc};

use crate::value_objects::UserId;

/// User account
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub first_name: String,
    pub last_name: String,
    /// Mobile number, kept for one-time-password verification
    pub phone_num: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl User {
    #[inline]
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }

    /// Apply a name edit, keeping fields that are not given.
    /// Returns false when nothing was supplied.
    pub fn rename(&mut self, first_name: Option<String>, last_name: Option<String>) -> bool {
        if first_name.is_none() && last_name.is_none() {
            return false;
        }
        if let Some(first) = first_name {
            self.first_name = first;
        }
        if let Some(last) = last_name {
            self.last_name = last;
        }
        true
    }
}

/// Fields required to register a user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub first_name: String,
    pub last_name: String,
    pub phone_num: String,
    pub email: String,
}
