//! # pindrop-db
//!
//! Database layer implementing repository traits with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! This crate provides PostgreSQL implementations for the ports
//! defined in `pindrop-core`. It handles:
//!
//! - Connection pool management and migrations
//! - Database models with SQLx `FromRow` derives
//! - Entity ↔ Model mappers
//! - Repository implementations, including the transactional vote store
//!
//! ## Usage
//!
//! ```rust,ignore
//! use pindrop_db::pool::{create_pool, DatabaseConfig};
//! use pindrop_db::repositories::PgReportRepository;
//! use pindrop_core::traits::ReportRepository;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let pool = create_pool(&DatabaseConfig::default()).await?;
//!     let report_repo = PgReportRepository::new(pool);
//!
//!     // Use the repository...
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, run_migrations, DatabaseConfig, PgPool};
pub use repositories::{PgReportRepository, PgUserRepository, PgVoteStore};
