//! Ports implemented by the infrastructure layer

mod repositories;
mod voting;

pub use repositories::{RepoResult, ReportQuery, ReportRepository, UserRepository};
pub use voting::{VoteStore, VoteTransaction};
