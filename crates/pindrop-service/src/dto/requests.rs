//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.

use serde::Deserialize;
use validator::Validate;

use pindrop_core::entities::ReportChanges;

/// Largest page a report listing may return
pub const MAX_PAGE_SIZE: i64 = 100;

/// Page size used when none is requested
pub const DEFAULT_PAGE_SIZE: i64 = 50;

// ============================================================================
// User Requests
// ============================================================================

/// Account creation request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(length(min = 1, max = 100, message = "First name must be 1-100 characters"))]
    pub first_name: String,

    #[validate(length(min = 1, max = 100, message = "Last name must be 1-100 characters"))]
    pub last_name: String,

    #[validate(length(min = 7, max = 20, message = "Phone number must be 7-20 characters"))]
    pub phone_num: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    /// Strength is checked by the auth service
    pub password: String,
}

/// Login request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    pub password: String,
}

/// Name edit of the current user
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateUserRequest {
    #[validate(length(min = 1, max = 100, message = "First name must be 1-100 characters"))]
    pub first_name: Option<String>,

    #[validate(length(min = 1, max = 100, message = "Last name must be 1-100 characters"))]
    pub last_name: Option<String>,
}

// ============================================================================
// Report Requests
// ============================================================================

/// File a new report
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateReportRequest {
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: String,

    #[validate(length(min = 1, max = 500, message = "Location must be 1-500 characters"))]
    pub location: String,

    #[serde(default)]
    #[validate(length(max = 2000, message = "Directions must be at most 2000 characters"))]
    pub directions: String,

    #[validate(length(min = 1, max = 5000, message = "Description must be 1-5000 characters"))]
    pub description: String,
}

/// Partial edit of a report
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateReportRequest {
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: Option<String>,

    #[validate(length(min = 1, max = 500, message = "Location must be 1-500 characters"))]
    pub location: Option<String>,

    #[validate(length(max = 2000, message = "Directions must be at most 2000 characters"))]
    pub directions: Option<String>,

    #[validate(length(min = 1, max = 5000, message = "Description must be 1-5000 characters"))]
    pub description: Option<String>,
}

impl From<UpdateReportRequest> for ReportChanges {
    fn from(request: UpdateReportRequest) -> Self {
        Self {
            title: request.title,
            location: request.location,
            directions: request.directions,
            description: request.description,
        }
    }
}

/// Query parameters of the report listing
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct ListReportsQuery {
    /// Return reports with an id greater than this one
    pub after: Option<i64>,

    #[validate(range(min = 1, max = 100, message = "Limit must be between 1 and 100"))]
    pub limit: Option<i64>,
}
