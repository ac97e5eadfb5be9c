//! PostgreSQL implementation of ReportRepository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::instrument;

use pindrop_core::entities::{NewReport, Report, ReportStats};
use pindrop_core::traits::{RepoResult, ReportQuery, ReportRepository};
use pindrop_core::value_objects::ReportId;

use crate::models::{ReportModel, ReportStatsModel};

use super::error::{map_db_error, report_not_found};

/// PostgreSQL implementation of ReportRepository
#[derive(Clone)]
pub struct PgReportRepository {
    pool: PgPool,
}

impl PgReportRepository {
    /// Create a new PgReportRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReportRepository for PgReportRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: ReportId) -> RepoResult<Option<Report>> {
        let result = sqlx::query_as::<_, ReportModel>(
            r"
            SELECT id, timestamp, user_id, title, location, directions, description, deleted_at
            FROM reports
            WHERE id = $1 AND deleted_at IS NULL
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Report::from))
    }

    #[instrument(skip(self))]
    async fn list(&self, query: ReportQuery) -> RepoResult<Vec<Report>> {
        let after = query.after.map_or(0, ReportId::into_inner);

        let results = sqlx::query_as::<_, ReportModel>(
            r"
            SELECT id, timestamp, user_id, title, location, directions, description, deleted_at
            FROM reports
            WHERE id > $1 AND deleted_at IS NULL
            ORDER BY id ASC
            LIMIT $2
            ",
        )
        .bind(after)
        .bind(query.limit)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Report::from).collect())
    }

    #[instrument(skip(self, report), fields(user_id = %report.user_id))]
    async fn create(&self, report: &NewReport) -> RepoResult<Report> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let model = sqlx::query_as::<_, ReportModel>(
            r"
            INSERT INTO reports (user_id, title, location, directions, description)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, timestamp, user_id, title, location, directions, description, deleted_at
            ",
        )
        .bind(report.user_id.into_inner())
        .bind(&report.title)
        .bind(&report.location)
        .bind(&report.directions)
        .bind(&report.description)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_db_error)?;

        sqlx::query(
            r"
            INSERT INTO report_stats (report_id, view_count, upvote_count, downvote_count)
            VALUES ($1, 0, 0, 0)
            ",
        )
        .bind(model.id)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;

        Ok(Report::from(model))
    }

    #[instrument(skip(self, report), fields(report_id = %report.id))]
    async fn update(&self, report: &Report) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE reports
            SET title = $2, location = $3, directions = $4, description = $5
            WHERE id = $1 AND deleted_at IS NULL
            ",
        )
        .bind(report.id.into_inner())
        .bind(&report.title)
        .bind(&report.location)
        .bind(&report.directions)
        .bind(&report.description)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(report_not_found(report.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: ReportId) -> RepoResult<DateTime<Utc>> {
        let deleted_at = sqlx::query_scalar::<_, DateTime<Utc>>(
            r"
            UPDATE reports
            SET deleted_at = NOW()
            WHERE id = $1 AND deleted_at IS NULL
            RETURNING deleted_at
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        deleted_at.ok_or_else(|| report_not_found(id))
    }

    #[instrument(skip(self))]
    async fn stats(&self, id: ReportId) -> RepoResult<Option<ReportStats>> {
        let result = sqlx::query_as::<_, ReportStatsModel>(
            r"
            SELECT s.report_id, s.view_count, s.upvote_count, s.downvote_count
            FROM report_stats s
            INNER JOIN reports r ON r.id = s.report_id
            WHERE s.report_id = $1 AND r.deleted_at IS NULL
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(ReportStats::from))
    }

    #[instrument(skip(self))]
    async fn record_view(&self, id: ReportId) -> RepoResult<Option<ReportStats>> {
        let result = sqlx::query_as::<_, ReportStatsModel>(
            r"
            UPDATE report_stats s
            SET view_count = s.view_count + 1
            FROM reports r
            WHERE s.report_id = $1 AND r.id = s.report_id AND r.deleted_at IS NULL
            RETURNING s.report_id, s.view_count, s.upvote_count, s.downvote_count
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(ReportStats::from))
    }
}
