//! Transactional port for the vote ledger and the stats counters
//!
//! A vote touches two tables that must change together. [`VoteStore::begin`]
//! hands out a [`VoteTransaction`]; its writes become visible only through
//! [`VoteTransaction::commit`]. Dropping the transaction rolls it back.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::entities::{ReportStats, Vote};
use crate::traits::RepoResult;
use crate::value_objects::{ReportId, StatsDelta, UserId, VoteState};

#[async_trait]
pub trait VoteStore: Send + Sync {
    /// Open a transactional scope
    async fn begin(&self) -> RepoResult<Box<dyn VoteTransaction>>;
}

#[async_trait]
pub trait VoteTransaction: Send {
    /// Read the report's counters and hold a lock on them until the scope
    /// ends. Concurrent votes on the same report queue up here.
    async fn lock_stats(&mut self, report_id: ReportId) -> RepoResult<Option<ReportStats>>;

    /// Read the stored vote of a user on a report
    async fn find_vote(&mut self, report_id: ReportId, user_id: UserId)
        -> RepoResult<Option<Vote>>;

    /// Store `state` as the user's vote: upsert for a direction, delete
    /// for [`VoteState::None`]
    async fn write_vote(
        &mut self,
        report_id: ReportId,
        user_id: UserId,
        state: VoteState,
        at: DateTime<Utc>,
    ) -> RepoResult<()>;

    /// Add `delta` to the vote counters and return the new row, or `None`
    /// when the report has no stats row
    async fn apply_delta(
        &mut self,
        report_id: ReportId,
        delta: StatsDelta,
    ) -> RepoResult<Option<ReportStats>>;

    /// Make every write of this scope visible
    async fn commit(self: Box<Self>) -> RepoResult<()>;
}
