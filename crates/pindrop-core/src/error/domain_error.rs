//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::{ReportId, UserId};

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("User not found: {0}")]
    UserNotFound(UserId),

    #[error("Report not found: {0}")]
    ReportNotFound(ReportId),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Password too weak: {0}")]
    WeakPassword(String),

    #[error("No new values to update")]
    NoChanges,

    // =========================================================================
    // Authorization Errors
    // =========================================================================
    #[error("Incorrect email or password")]
    InvalidCredentials,

    #[error("Report is not owned by the user")]
    NotReportOwner,

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Email already in use")]
    EmailAlreadyExists,

    #[error("Transaction aborted by a concurrent update: {0}")]
    TransactionConflict(String),

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Data integrity violation: {0}")]
    IntegrityViolation(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Cache error: {0}")]
    CacheError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::UserNotFound(_) => "UNKNOWN_USER",
            Self::ReportNotFound(_) => "UNKNOWN_REPORT",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::WeakPassword(_) => "WEAK_PASSWORD",
            Self::NoChanges => "NO_CHANGES",

            // Authorization
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::NotReportOwner => "NOT_REPORT_OWNER",

            // Conflict
            Self::EmailAlreadyExists => "EMAIL_ALREADY_EXISTS",
            Self::TransactionConflict(_) => "TRANSACTION_CONFLICT",

            // Infrastructure
            Self::IntegrityViolation(_) => "INTEGRITY_VIOLATION",
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::CacheError(_) => "CACHE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::UserNotFound(_) | Self::ReportNotFound(_))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_) | Self::WeakPassword(_) | Self::NoChanges
        )
    }

    /// Check if this is an authorization error
    pub fn is_authorization(&self) -> bool {
        matches!(self, Self::InvalidCredentials | Self::NotReportOwner)
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            Self::EmailAlreadyExists | Self::TransactionConflict(_)
        )
    }

    /// Stored data broke an invariant; not fixable by the caller
    pub fn is_integrity_violation(&self) -> bool {
        matches!(self, Self::IntegrityViolation(_))
    }
}
