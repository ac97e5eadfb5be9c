//! PostgreSQL implementation of the vote ledger
//!
//! Every vote runs in one transaction. The report's `report_stats` row is
//! locked with `SELECT ... FOR UPDATE` before the ledger is read, so two
//! votes on the same report are applied one after the other and neither
//! counter update is lost. Counter changes are written as increments
//! rather than as absolute values read earlier.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Postgres, Transaction};
use tracing::{debug, instrument};

use pindrop_core::entities::{ReportStats, Vote};
use pindrop_core::error::DomainError;
use pindrop_core::traits::{RepoResult, VoteStore, VoteTransaction};
use pindrop_core::value_objects::{ReportId, StatsDelta, UserId, VoteState};

use crate::mappers::VoteUpsert;
use crate::models::{ReportStatsModel, VoteModel};

use super::error::{map_db_error, map_unique_violation};

/// PostgreSQL implementation of VoteStore
#[derive(Clone)]
pub struct PgVoteStore {
    pool: PgPool,
}

impl PgVoteStore {
    /// Create a new PgVoteStore
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl VoteStore for PgVoteStore {
    async fn begin(&self) -> RepoResult<Box<dyn VoteTransaction>> {
        let tx = self.pool.begin().await.map_err(map_db_error)?;
        Ok(Box::new(PgVoteTransaction { tx }))
    }
}

/// Open vote transaction. Rolled back on drop unless committed.
pub struct PgVoteTransaction {
    tx: Transaction<'static, Postgres>,
}

#[async_trait]
impl VoteTransaction for PgVoteTransaction {
    #[instrument(skip(self))]
    async fn lock_stats(&mut self, report_id: ReportId) -> RepoResult<Option<ReportStats>> {
        let result = sqlx::query_as::<_, ReportStatsModel>(
            r"
            SELECT report_id, view_count, upvote_count, downvote_count
            FROM report_stats
            WHERE report_id = $1
            FOR UPDATE
            ",
        )
        .bind(report_id.into_inner())
        .fetch_optional(&mut *self.tx)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(ReportStats::from))
    }

    #[instrument(skip(self))]
    async fn find_vote(
        &mut self,
        report_id: ReportId,
        user_id: UserId,
    ) -> RepoResult<Option<Vote>> {
        let result = sqlx::query_as::<_, VoteModel>(
            r"
            SELECT report_id, user_id, is_upvoted, is_downvoted, timestamp
            FROM votes
            WHERE report_id = $1 AND user_id = $2
            ",
        )
        .bind(report_id.into_inner())
        .bind(user_id.into_inner())
        .fetch_optional(&mut *self.tx)
        .await
        .map_err(map_db_error)?;

        result.map(Vote::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn write_vote(
        &mut self,
        report_id: ReportId,
        user_id: UserId,
        state: VoteState,
        at: DateTime<Utc>,
    ) -> RepoResult<()> {
        let Some(direction) = state.direction() else {
            sqlx::query("DELETE FROM votes WHERE report_id = $1 AND user_id = $2")
                .bind(report_id.into_inner())
                .bind(user_id.into_inner())
                .execute(&mut *self.tx)
                .await
                .map_err(map_db_error)?;

            debug!("Vote cleared");
            return Ok(());
        };

        let row = VoteUpsert::new(report_id, user_id, direction, at);
        sqlx::query(
            r"
            INSERT INTO votes (report_id, user_id, is_upvoted, is_downvoted, timestamp)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (report_id, user_id) DO UPDATE
            SET is_upvoted = EXCLUDED.is_upvoted,
                is_downvoted = EXCLUDED.is_downvoted,
                timestamp = EXCLUDED.timestamp
            ",
        )
        .bind(row.report_id)
        .bind(row.user_id)
        .bind(row.is_upvoted)
        .bind(row.is_downvoted)
        .bind(row.timestamp)
        .execute(&mut *self.tx)
        .await
        .map_err(|e| {
            map_unique_violation(e, || {
                DomainError::TransactionConflict("concurrent vote on the same report".to_string())
            })
        })?;

        debug!(%direction, "Vote stored");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn apply_delta(
        &mut self,
        report_id: ReportId,
        delta: StatsDelta,
    ) -> RepoResult<Option<ReportStats>> {
        let result = sqlx::query_as::<_, ReportStatsModel>(
            r"
            UPDATE report_stats
            SET upvote_count = upvote_count + $2,
                downvote_count = downvote_count + $3
            WHERE report_id = $1
            RETURNING report_id, view_count, upvote_count, downvote_count
            ",
        )
        .bind(report_id.into_inner())
        .bind(delta.upvotes)
        .bind(delta.downvotes)
        .fetch_optional(&mut *self.tx)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(ReportStats::from))
    }

    async fn commit(self: Box<Self>) -> RepoResult<()> {
        self.tx.commit().await.map_err(map_db_error)
    }
}
