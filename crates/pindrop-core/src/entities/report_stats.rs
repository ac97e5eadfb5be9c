//! Report statistics - view and vote counters kept per report

use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::value_objects::{ReportId, StatsDelta};

/// Counters for one report. Created with the report; the vote counters
/// always equal the number of stored up and down votes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportStats {
    pub report_id: ReportId,
    pub view_count: i64,
    pub upvote_count: i64,
    pub downvote_count: i64,
}

impl ReportStats {
    /// Counters of a freshly created report
    pub const fn zeroed(report_id: ReportId) -> Self {
        Self {
            report_id,
            view_count: 0,
            upvote_count: 0,
            downvote_count: 0,
        }
    }

    /// Counters after applying `delta`. `view_count` is left alone.
    pub fn apply_delta(&self, delta: StatsDelta) -> Result<Self, DomainError> {
        let upvote_count = self.upvote_count + delta.upvotes;
        let downvote_count = self.downvote_count + delta.downvotes;

        if upvote_count < 0 || downvote_count < 0 {
            return Err(DomainError::IntegrityViolation(format!(
                "vote counters of report {} would become negative ({upvote_count}, {downvote_count})",
                self.report_id
            )));
        }

        Ok(Self {
            upvote_count,
            downvote_count,
            ..*self
        })
    }
}
