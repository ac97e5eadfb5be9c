//! Repository traits (ports) - define the interface for data access
//!
//! These traits follow the Repository pattern from Domain-Driven Design.
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::entities::{NewReport, NewUser, Report, ReportStats, User};
use crate::error::DomainError;
use crate::value_objects::{ReportId, UserId};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a live user by ID
    async fn find_by_id(&self, id: UserId) -> RepoResult<Option<User>>;

    /// Find a live user by email
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>>;

    /// Check if email is already taken by a live account
    async fn email_exists(&self, email: &str) -> RepoResult<bool>;

    /// Create a new user and return it with its assigned id
    async fn create(&self, user: &NewUser, password_hash: &str) -> RepoResult<User>;

    /// Update the editable fields of a user
    async fn update(&self, user: &User) -> RepoResult<()>;

    /// Soft delete a user, returning the deletion time
    async fn delete(&self, id: UserId) -> RepoResult<DateTime<Utc>>;

    /// Get password hash for authentication
    async fn get_password_hash(&self, id: UserId) -> RepoResult<Option<String>>;
}

// ============================================================================
// Report Repository
// ============================================================================

/// Keyset pagination for report listings
#[derive(Debug, Clone)]
pub struct ReportQuery {
    pub after: Option<ReportId>,
    pub limit: i64,
}

impl Default for ReportQuery {
    fn default() -> Self {
        Self {
            after: None,
            limit: 50,
        }
    }
}

#[async_trait]
pub trait ReportRepository: Send + Sync {
    /// Find a report that has not been soft deleted
    async fn find_by_id(&self, id: ReportId) -> RepoResult<Option<Report>>;

    /// List live reports in id order
    async fn list(&self, query: ReportQuery) -> RepoResult<Vec<Report>>;

    /// Insert a report together with its zeroed stats row
    async fn create(&self, report: &NewReport) -> RepoResult<Report>;

    /// Update the text fields of a report
    async fn update(&self, report: &Report) -> RepoResult<()>;

    /// Soft delete a report, returning the deletion time
    async fn delete(&self, id: ReportId) -> RepoResult<DateTime<Utc>>;

    /// Get the counters of a report
    async fn stats(&self, id: ReportId) -> RepoResult<Option<ReportStats>>;

    /// Increment the view counter of a report
    async fn record_view(&self, id: ReportId) -> RepoResult<Option<ReportStats>>;
}
