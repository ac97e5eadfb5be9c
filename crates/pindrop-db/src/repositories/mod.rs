//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in pindrop-core.
//! Each repository handles database operations for a specific domain entity.

mod error;
mod report;
mod user;
mod vote;

pub use error::{map_db_error, map_unique_violation};
pub use report::PgReportRepository;
pub use user::PgUserRepository;
pub use vote::{PgVoteStore, PgVoteTransaction};
