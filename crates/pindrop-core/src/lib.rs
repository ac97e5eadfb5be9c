//! # pindrop-core
//!
//! Domain layer containing entities, value objects, the vote ledger state
//! machine and repository traits.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    current_state, NewReport, NewUser, Report, ReportChanges, ReportStats, User, Vote,
};
pub use error::DomainError;
pub use traits::{
    RepoResult, ReportQuery, ReportRepository, UserRepository, VoteStore, VoteTransaction,
};
pub use value_objects::{
    IdParseError, ReportId, StatsDelta, UserId, VoteDirection, VoteState, VoteTransition,
};
