//! Vote service
//!
//! Records up and down votes. Each vote reads the user's current vote,
//! moves it one step through the ledger state machine and adds the
//! resulting delta to the report's counters, all inside one transaction
//! of the vote store.

use chrono::{DateTime, Utc};
use tracing::{error, info, instrument};

use pindrop_core::entities::{current_state, ReportStats};
use pindrop_core::error::DomainError;
use pindrop_core::traits::{ReportRepository, VoteStore};
use pindrop_core::value_objects::{ReportId, UserId, VoteDirection, VoteTransition};

use super::context::ServiceContext;
use super::error::ServiceResult;

fn missing_stats(report_id: ReportId) -> DomainError {
    DomainError::IntegrityViolation(format!("report {report_id} has no stats row"))
}

/// Apply one vote request and return the transition taken together with
/// the committed counters.
///
/// The stats row is locked before the current vote is read, so requests
/// on the same report are applied one at a time. Nothing is written when
/// any step fails.
pub async fn cast_vote(
    reports: &dyn ReportRepository,
    store: &dyn VoteStore,
    report_id: ReportId,
    user_id: UserId,
    direction: VoteDirection,
    now: DateTime<Utc>,
) -> Result<(VoteTransition, ReportStats), DomainError> {
    if reports.find_by_id(report_id).await?.is_none() {
        return Err(DomainError::ReportNotFound(report_id));
    }

    let mut tx = store.begin().await?;

    let locked = tx
        .lock_stats(report_id)
        .await?
        .ok_or_else(|| missing_stats(report_id))?;
    let vote = tx.find_vote(report_id, user_id).await?;
    let transition = current_state(vote.as_ref()).apply(direction);

    // Reject a delta that would drive a counter below zero before writing
    locked.apply_delta(transition.delta)?;

    tx.write_vote(report_id, user_id, transition.next, now)
        .await?;
    let stats = tx
        .apply_delta(report_id, transition.delta)
        .await?
        .ok_or_else(|| missing_stats(report_id))?;

    tx.commit().await?;

    Ok((transition, stats))
}

/// Vote service
pub struct VoteService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> VoteService<'a> {
    /// Create a new VoteService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Record a vote by `user_id` on `report_id`
    #[instrument(skip(self))]
    pub async fn vote(
        &self,
        report_id: ReportId,
        user_id: UserId,
        direction: VoteDirection,
    ) -> ServiceResult<ReportStats> {
        let result = cast_vote(
            self.ctx.report_repo(),
            self.ctx.vote_store(),
            report_id,
            user_id,
            direction,
            Utc::now(),
        )
        .await;

        match result {
            Ok((transition, stats)) => {
                info!(
                    report_id = %report_id,
                    user_id = %user_id,
                    direction = %direction,
                    previous = %transition.previous,
                    next = %transition.next,
                    upvotes = stats.upvote_count,
                    downvotes = stats.downvote_count,
                    "Vote recorded"
                );
                Ok(stats)
            }
            Err(e) => {
                if e.is_integrity_violation() {
                    error!(report_id = %report_id, error = %e, "Vote aborted on inconsistent data");
                }
                Err(e.into())
            }
        }
    }
}
