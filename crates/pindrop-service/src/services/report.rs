//! Report service
//!
//! Filing, listing, editing and deleting reports, plus their counters.

use pindrop_core::entities::{NewReport, Report, ReportChanges, ReportStats};
use pindrop_core::error::DomainError;
use pindrop_core::traits::ReportQuery;
use pindrop_core::{ReportId, UserId};
use tracing::{error, info, instrument};

use crate::dto::{
    CreateReportRequest, DeletedReportResponse, ListReportsQuery, ReportListResponse,
    ReportResponse, UpdateReportRequest, DEFAULT_PAGE_SIZE,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// A live report without its stats row is broken data, never a 404
fn missing_stats(report_id: ReportId) -> ServiceError {
    error!(report_id = %report_id, "Live report has no stats row");
    DomainError::IntegrityViolation(format!("report {report_id} has no stats row")).into()
}

/// Report service
pub struct ReportService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ReportService<'a> {
    /// Create a new ReportService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    async fn find(&self, report_id: ReportId) -> ServiceResult<Report> {
        self.ctx
            .report_repo()
            .find_by_id(report_id)
            .await?
            .ok_or_else(|| DomainError::ReportNotFound(report_id).into())
    }

    /// Load a report the user owns
    async fn find_owned(&self, report_id: ReportId, user_id: UserId) -> ServiceResult<Report> {
        let report = self.find(report_id).await?;
        if !report.is_owned_by(user_id) {
            return Err(DomainError::NotReportOwner.into());
        }
        Ok(report)
    }

    /// File a report; its counters start at zero
    #[instrument(skip(self, request))]
    pub async fn create_report(
        &self,
        user_id: UserId,
        request: CreateReportRequest,
    ) -> ServiceResult<ReportResponse> {
        let report = self
            .ctx
            .report_repo()
            .create(&NewReport {
                user_id,
                title: request.title,
                location: request.location,
                directions: request.directions,
                description: request.description,
            })
            .await?;

        info!(report_id = %report.id, user_id = %user_id, "Report created");

        Ok(ReportResponse::from(report))
    }

    /// One page of live reports in id order
    #[instrument(skip(self))]
    pub async fn list_reports(&self, query: ListReportsQuery) -> ServiceResult<ReportListResponse> {
        let limit = query.limit.unwrap_or(DEFAULT_PAGE_SIZE);
        if !(1..=crate::dto::MAX_PAGE_SIZE).contains(&limit) {
            return Err(ServiceError::validation("limit must be between 1 and 100"));
        }

        let reports = self
            .ctx
            .report_repo()
            .list(ReportQuery {
                after: query.after.map(ReportId::new),
                limit,
            })
            .await?;

        Ok(ReportListResponse {
            reports: reports.into_iter().map(ReportResponse::from).collect(),
        })
    }

    #[instrument(skip(self))]
    pub async fn get_report(&self, report_id: ReportId) -> ServiceResult<ReportResponse> {
        Ok(ReportResponse::from(self.find(report_id).await?))
    }

    /// Counters of a live report
    #[instrument(skip(self))]
    pub async fn get_stats(&self, report_id: ReportId) -> ServiceResult<ReportStats> {
        self.find(report_id).await?;
        self.ctx
            .report_repo()
            .stats(report_id)
            .await?
            .ok_or_else(|| missing_stats(report_id))
    }

    /// Count one view of a report
    #[instrument(skip(self))]
    pub async fn record_view(&self, report_id: ReportId) -> ServiceResult<ReportStats> {
        self.find(report_id).await?;
        self.ctx
            .report_repo()
            .record_view(report_id)
            .await?
            .ok_or_else(|| missing_stats(report_id))
    }

    /// Edit a report owned by `user_id`
    #[instrument(skip(self, request))]
    pub async fn update_report(
        &self,
        report_id: ReportId,
        user_id: UserId,
        request: UpdateReportRequest,
    ) -> ServiceResult<ReportResponse> {
        let mut report = self.find_owned(report_id, user_id).await?;

        let changes = ReportChanges::from(request);
        if changes.is_empty() {
            return Err(DomainError::NoChanges.into());
        }
        report.apply(changes);
        self.ctx.report_repo().update(&report).await?;

        info!(report_id = %report_id, "Report updated");

        Ok(ReportResponse::from(report))
    }

    /// Soft delete a report owned by `user_id`
    #[instrument(skip(self))]
    pub async fn delete_report(
        &self,
        report_id: ReportId,
        user_id: UserId,
    ) -> ServiceResult<DeletedReportResponse> {
        let report = self.find_owned(report_id, user_id).await?;
        let deleted_at = self.ctx.report_repo().delete(report_id).await?;

        info!(report_id = %report_id, "Report deleted");

        Ok(DeletedReportResponse::new(&report, deleted_at))
    }
}
