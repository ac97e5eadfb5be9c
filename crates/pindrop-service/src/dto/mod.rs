//! Data transfer objects for API requests and responses
//!
//! This module provides:
//! - Request DTOs with validation for API inputs
//! - Response DTOs for serializing API outputs, with `From` conversions
//!   from domain entities

pub mod requests;
pub mod responses;

pub use requests::{
    CreateReportRequest, CreateUserRequest, ListReportsQuery, LoginRequest, UpdateReportRequest,
    UpdateUserRequest, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE,
};

pub use responses::{
    DeletedReportResponse, DeletedUserResponse, HealthChecks, HealthResponse, LogoutResponse,
    ReadinessResponse, ReportListResponse, ReportResponse, UserResponse,
};
