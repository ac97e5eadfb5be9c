//! Database models - SQLx-compatible structs for PostgreSQL tables

mod report;
mod user;
mod vote;

pub use report::{ReportModel, ReportStatsModel};
pub use user::UserModel;
pub use vote::VoteModel;
