//! Route definitions
//!
//! API routes mounted under /api/v0, plus the health probes.

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::{auth, health, reports, users};
use crate::state::AppState;

/// Create the main router with all routes
pub fn create_router() -> Router<AppState> {
    Router::new()
        .nest("/api/v0", api_v0_routes())
        .merge(health_routes())
}

/// Health check routes
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API v0 routes
fn api_v0_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(health::index))
        .merge(user_routes())
        .merge(report_routes())
}

/// Account, session and profile routes
fn user_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/users",
            post(auth::register)
                .patch(users::update_current_user)
                .delete(users::delete_current_user),
        )
        .route("/users/token", post(auth::login).delete(auth::logout))
        .route("/users/:user_id", get(users::get_user))
}

/// Report routes
fn report_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/reports",
            post(reports::create_report).get(reports::list_reports),
        )
        .route(
            "/reports/:report_id",
            get(reports::get_report)
                .patch(reports::update_report)
                .delete(reports::delete_report),
        )
        .route("/reports/:report_id/stats", get(reports::get_report_stats))
        .route("/reports/:report_id/views", post(reports::record_view))
        .route("/reports/:report_id/upvote", post(reports::upvote))
        .route("/reports/:report_id/downvote", post(reports::downvote))
}
