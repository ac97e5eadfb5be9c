//! Business logic services
//!
//! This module contains the service layer implementations that handle
//! business logic, validation, and orchestration of domain operations.

pub mod auth;
pub mod context;
pub mod error;
pub mod report;
pub mod user;
pub mod vote;

// Re-export all services for convenience
pub use auth::{AuthService, AuthSession};
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use report::ReportService;
pub use user::UserService;
pub use vote::{cast_vote, VoteService};
