//! # pindrop-service
//!
//! Application layer containing business logic, services, and DTOs.

pub mod dto;
pub mod services;

#[cfg(test)]
mod testing;

pub use services::{
    AuthService, AuthSession, ReportService, ServiceContext, ServiceContextBuilder, ServiceError,
    ServiceResult, UserService, VoteService,
};
