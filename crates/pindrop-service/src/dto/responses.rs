//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.

use chrono::{DateTime, Utc};
use serde::Serialize;

use pindrop_core::entities::{Report, User};

// ============================================================================
// User Responses
// ============================================================================

/// Account as returned to clients
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub phone_num: String,
    pub email: String,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.into_inner(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            phone_num: user.phone_num.clone(),
            email: user.email.clone(),
        }
    }
}

/// Confirmation of an account deletion
#[derive(Debug, Clone, Serialize)]
pub struct DeletedUserResponse {
    pub message: String,
    pub first_name: String,
    pub last_name: String,
    pub deleted_at: DateTime<Utc>,
}

impl DeletedUserResponse {
    pub fn new(user: &User, deleted_at: DateTime<Utc>) -> Self {
        Self {
            message: "user deleted".to_string(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            deleted_at,
        }
    }
}

/// Confirmation of a logout
#[derive(Debug, Clone, Serialize)]
pub struct LogoutResponse {
    pub detail: String,
}

impl LogoutResponse {
    pub fn terminated() -> Self {
        Self {
            detail: "Session terminated".to_string(),
        }
    }
}

// ============================================================================
// Report Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct ReportResponse {
    pub id: i64,
    pub timestamp: DateTime<Utc>,
    pub user_id: i64,
    pub title: String,
    pub location: String,
    pub directions: String,
    pub description: String,
}

impl From<&Report> for ReportResponse {
    fn from(report: &Report) -> Self {
        Self {
            id: report.id.into_inner(),
            timestamp: report.timestamp,
            user_id: report.user_id.into_inner(),
            title: report.title.clone(),
            location: report.location.clone(),
            directions: report.directions.clone(),
            description: report.description.clone(),
        }
    }
}

impl From<Report> for ReportResponse {
    fn from(report: Report) -> Self {
        Self::from(&report)
    }
}

/// One page of reports
#[derive(Debug, Clone, Serialize)]
pub struct ReportListResponse {
    pub reports: Vec<ReportResponse>,
}

/// Confirmation of a report deletion
#[derive(Debug, Clone, Serialize)]
pub struct DeletedReportResponse {
    pub message: String,
    pub title: String,
    pub deleted_at: DateTime<Utc>,
}

impl DeletedReportResponse {
    pub fn new(report: &Report, deleted_at: DateTime<Utc>) -> Self {
        Self {
            message: "report deleted".to_string(),
            title: report.title.clone(),
            deleted_at,
        }
    }
}

// ============================================================================
// Health Responses
// ============================================================================

/// Basic health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health check status for each backing service
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub database: String,
    pub redis: String,
}

fn health_label(healthy: bool) -> String {
    if healthy { "healthy" } else { "unhealthy" }.to_string()
}

impl ReadinessResponse {
    pub fn ready(database_healthy: bool, redis_healthy: bool) -> Self {
        let all_healthy = database_healthy && redis_healthy;
        Self {
            status: if all_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                database: health_label(database_healthy),
                redis: health_label(redis_healthy),
            },
        }
    }

    pub fn is_ready(&self) -> bool {
        self.status == "ready"
    }
}
