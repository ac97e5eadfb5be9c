//! Test fixtures and data generators
//!
//! Provides reusable test data for integration tests.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Unique suffix for test data; databases outlive a single test run
pub fn unique_suffix() -> String {
    uuid::Uuid::new_v4().simple().to_string()
}

/// Account creation request
#[derive(Debug, Clone, Serialize)]
pub struct CreateUserRequest {
    pub first_name: String,
    pub last_name: String,
    pub phone_num: String,
    pub email: String,
    pub password: String,
}

impl CreateUserRequest {
    pub fn unique() -> Self {
        Self {
            first_name: "Test".to_string(),
            last_name: "Reporter".to_string(),
            phone_num: "5551234567".to_string(),
            email: format!("reporter-{}@example.com", unique_suffix()),
            password: "Pothole2024".to_string(),
        }
    }
}

/// Login request
#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    pub fn from_user(user: &CreateUserRequest) -> Self {
        Self {
            email: user.email.clone(),
            password: user.password.clone(),
        }
    }
}

/// Token returned by login
#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,
}

/// User response
#[derive(Debug, Deserialize)]
pub struct UserResponse {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub phone_num: String,
    pub email: String,
}

/// Account deletion response
#[derive(Debug, Deserialize)]
pub struct DeletedUserResponse {
    pub message: String,
    pub first_name: String,
    pub last_name: String,
    pub deleted_at: DateTime<Utc>,
}

/// Report creation request
#[derive(Debug, Clone, Serialize)]
pub struct CreateReportRequest {
    pub title: String,
    pub location: String,
    pub directions: String,
    pub description: String,
}

impl CreateReportRequest {
    pub fn sample() -> Self {
        Self {
            title: "Broken streetlight".to_string(),
            location: "Corner of 5th and Main".to_string(),
            directions: "North side, next to the bus stop".to_string(),
            description: "Light has been out for a week".to_string(),
        }
    }
}

/// Report response
#[derive(Debug, Deserialize)]
pub struct ReportResponse {
    pub id: i64,
    pub timestamp: DateTime<Utc>,
    pub user_id: i64,
    pub title: String,
    pub location: String,
    pub directions: String,
    pub description: String,
}

/// Report listing
#[derive(Debug, Deserialize)]
pub struct ReportListResponse {
    pub reports: Vec<ReportResponse>,
}

/// Report deletion response
#[derive(Debug, Deserialize)]
pub struct DeletedReportResponse {
    pub message: String,
    pub title: String,
    pub deleted_at: DateTime<Utc>,
}

/// Counters of a report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct ReportStats {
    pub report_id: i64,
    pub view_count: i64,
    pub upvote_count: i64,
    pub downvote_count: i64,
}

impl ReportStats {
    /// (upvotes, downvotes)
    pub fn votes(&self) -> (i64, i64) {
        (self.upvote_count, self.downvote_count)
    }
}
