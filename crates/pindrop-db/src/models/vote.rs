//! Vote database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for votes table
#[derive(Debug, Clone, FromRow)]
pub struct VoteModel {
    pub report_id: i64,
    pub user_id: i64,
    pub is_upvoted: bool,
    pub is_downvoted: bool,
    pub timestamp: DateTime<Utc>,
}
