//! Report and report stats database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for reports table
#[derive(Debug, Clone, FromRow)]
pub struct ReportModel {
    pub id: i64,
    pub timestamp: DateTime<Utc>,
    pub user_id: i64,
    pub title: String,
    pub location: String,
    pub directions: String,
    pub description: String,
    pub deleted_at: Option<DateTime<Utc>>,
}

/// Database model for report_stats table
#[derive(Debug, Clone, Copy, FromRow)]
pub struct ReportStatsModel {
    pub report_id: i64,
    pub view_count: i64,
    pub upvote_count: i64,
    pub downvote_count: i64,
}
