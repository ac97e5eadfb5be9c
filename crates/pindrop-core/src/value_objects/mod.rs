//! Value objects - immutable types that represent domain concepts

mod ids;
mod vote;

pub use ids::{IdParseError, ReportId, UserId};
pub use vote::{StatsDelta, VoteDirection, VoteState, VoteTransition};
