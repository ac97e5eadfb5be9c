//! Error handling utilities for repositories

use pindrop_core::error::DomainError;
use pindrop_core::value_objects::{ReportId, UserId};
use sqlx::Error as SqlxError;

/// SQLSTATE raised when a serializable transaction cannot be ordered
pub const SERIALIZATION_FAILURE: &str = "40001";

/// SQLSTATE raised when Postgres breaks a lock cycle
pub const DEADLOCK_DETECTED: &str = "40P01";

/// SQLSTATE raised by a failed CHECK constraint
pub const CHECK_VIOLATION: &str = "23514";

/// Convert SQLx error to DomainError
///
/// Contention aborts become `TransactionConflict` so callers can retry the
/// request; CHECK failures mean a counter or vote row would break an
/// invariant.
pub fn map_db_error(e: SqlxError) -> DomainError {
    if let Some(db_err) = e.as_database_error() {
        match db_err.code().as_deref() {
            Some(SERIALIZATION_FAILURE | DEADLOCK_DETECTED) => {
                return DomainError::TransactionConflict(db_err.message().to_string());
            }
            Some(CHECK_VIOLATION) => {
                return DomainError::IntegrityViolation(db_err.message().to_string());
            }
            _ => {}
        }
    }
    DomainError::DatabaseError(e.to_string())
}

/// Check for unique violation and return appropriate error or fallback
pub fn map_unique_violation<F>(e: SqlxError, on_unique: F) -> DomainError
where
    F: FnOnce() -> DomainError,
{
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return on_unique();
        }
    }
    map_db_error(e)
}

/// Create a "user not found" error
pub fn user_not_found(id: UserId) -> DomainError {
    DomainError::UserNotFound(id)
}

/// Create a "report not found" error
pub fn report_not_found(id: ReportId) -> DomainError {
    DomainError::ReportNotFound(id)
}
