//! Vote entity - one user's stored vote on one report

use chrono::{DateTime, Utc};

use crate::value_objects::{ReportId, UserId, VoteDirection, VoteState};

/// A stored vote. Clearing a vote deletes the row, so a `Vote` always has
/// a direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vote {
    pub report_id: ReportId,
    pub user_id: UserId,
    pub direction: VoteDirection,
    /// Time of the last change
    pub timestamp: DateTime<Utc>,
}

impl Vote {
    pub fn state(&self) -> VoteState {
        VoteState::from(self.direction)
    }
}

/// Ledger state of an optional stored vote
pub fn current_state(vote: Option<&Vote>) -> VoteState {
    vote.map_or(VoteState::None, Vote::state)
}
