//! Report handlers
//!
//! Endpoints for reports, their counters and votes.

use axum::{extract::State, Json};
use pindrop_core::{ReportId, ReportStats, VoteDirection};
use pindrop_service::dto::{
    CreateReportRequest, DeletedReportResponse, ListReportsQuery, ReportListResponse,
    ReportResponse, UpdateReportRequest,
};
use pindrop_service::{ReportService, VoteService};

use crate::extractors::{AuthUser, IdPath, ValidatedJson, ValidatedQuery};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// File a report
///
/// POST /reports
pub async fn create_report(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateReportRequest>,
) -> ApiResult<Created<Json<ReportResponse>>> {
    let service = ReportService::new(state.service_context());
    let response = service.create_report(auth.user_id, request).await?;
    Ok(Created(Json(response)))
}

/// List live reports
///
/// GET /reports?after=&limit=
pub async fn list_reports(
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<ListReportsQuery>,
) -> ApiResult<Json<ReportListResponse>> {
    let service = ReportService::new(state.service_context());
    let response = service.list_reports(query).await?;
    Ok(Json(response))
}

/// GET /reports/{report_id}
pub async fn get_report(
    State(state): State<AppState>,
    IdPath(report_id): IdPath<ReportId>,
) -> ApiResult<Json<ReportResponse>> {
    let service = ReportService::new(state.service_context());
    let response = service.get_report(report_id).await?;
    Ok(Json(response))
}

/// GET /reports/{report_id}/stats
pub async fn get_report_stats(
    State(state): State<AppState>,
    IdPath(report_id): IdPath<ReportId>,
) -> ApiResult<Json<ReportStats>> {
    let service = ReportService::new(state.service_context());
    let stats = service.get_stats(report_id).await?;
    Ok(Json(stats))
}

/// Count one view
///
/// POST /reports/{report_id}/views
pub async fn record_view(
    State(state): State<AppState>,
    IdPath(report_id): IdPath<ReportId>,
) -> ApiResult<Json<ReportStats>> {
    let service = ReportService::new(state.service_context());
    let stats = service.record_view(report_id).await?;
    Ok(Json(stats))
}

/// Edit a report owned by the caller
///
/// PATCH /reports/{report_id}
pub async fn update_report(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(report_id): IdPath<ReportId>,
    ValidatedJson(request): ValidatedJson<UpdateReportRequest>,
) -> ApiResult<Json<ReportResponse>> {
    let service = ReportService::new(state.service_context());
    let response = service
        .update_report(report_id, auth.user_id, request)
        .await?;
    Ok(Json(response))
}

/// Soft delete a report owned by the caller
///
/// DELETE /reports/{report_id}
pub async fn delete_report(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(report_id): IdPath<ReportId>,
) -> ApiResult<Json<DeletedReportResponse>> {
    let service = ReportService::new(state.service_context());
    let response = service.delete_report(report_id, auth.user_id).await?;
    Ok(Json(response))
}

/// POST /reports/{report_id}/upvote
pub async fn upvote(
    state: State<AppState>,
    auth: AuthUser,
    report_id: IdPath<ReportId>,
) -> ApiResult<Json<ReportStats>> {
    vote(state, auth, report_id, VoteDirection::Up).await
}

/// POST /reports/{report_id}/downvote
pub async fn downvote(
    state: State<AppState>,
    auth: AuthUser,
    report_id: IdPath<ReportId>,
) -> ApiResult<Json<ReportStats>> {
    vote(state, auth, report_id, VoteDirection::Down).await
}

async fn vote(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(report_id): IdPath<ReportId>,
    direction: VoteDirection,
) -> ApiResult<Json<ReportStats>> {
    let service = VoteService::new(state.service_context());
    let stats = service.vote(report_id, auth.user_id, direction).await?;
    Ok(Json(stats))
}
