//! Vote entity <-> model mapper
//!
//! The table stores a vote as two booleans. A row is only valid with
//! exactly one of them set.

use chrono::{DateTime, Utc};
use pindrop_core::entities::Vote;
use pindrop_core::error::DomainError;
use pindrop_core::value_objects::{ReportId, UserId, VoteDirection, VoteState};

use crate::models::VoteModel;

impl TryFrom<VoteModel> for Vote {
    type Error = DomainError;

    fn try_from(model: VoteModel) -> Result<Self, Self::Error> {
        let direction = VoteState::from_flags(model.is_upvoted, model.is_downvoted)?
            .direction()
            .ok_or_else(|| {
                DomainError::IntegrityViolation(format!(
                    "stored vote of user {} on report {} has no direction",
                    model.user_id, model.report_id
                ))
            })?;

        Ok(Vote {
            report_id: ReportId::new(model.report_id),
            user_id: UserId::new(model.user_id),
            direction,
            timestamp: model.timestamp,
        })
    }
}

/// Values written by the vote upsert
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VoteUpsert {
    pub report_id: i64,
    pub user_id: i64,
    pub is_upvoted: bool,
    pub is_downvoted: bool,
    pub timestamp: DateTime<Utc>,
}

impl VoteUpsert {
    pub fn new(
        report_id: ReportId,
        user_id: UserId,
        direction: VoteDirection,
        timestamp: DateTime<Utc>,
    ) -> Self {
        let (is_upvoted, is_downvoted) = VoteState::from(direction).flags();
        Self {
            report_id: report_id.into_inner(),
            user_id: user_id.into_inner(),
            is_upvoted,
            is_downvoted,
            timestamp,
        }
    }
}
