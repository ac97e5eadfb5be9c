//! Report and stats entity <-> model mappers

use pindrop_core::entities::{Report, ReportStats};
use pindrop_core::value_objects::{ReportId, UserId};

use crate::models::{ReportModel, ReportStatsModel};

impl From<ReportModel> for Report {
    fn from(model: ReportModel) -> Self {
        Report {
            id: ReportId::new(model.id),
            user_id: UserId::new(model.user_id),
            title: model.title,
            location: model.location,
            directions: model.directions,
            description: model.description,
            timestamp: model.timestamp,
            deleted_at: model.deleted_at,
        }
    }
}

impl From<ReportStatsModel> for ReportStats {
    fn from(model: ReportStatsModel) -> Self {
        ReportStats {
            report_id: ReportId::new(model.report_id),
            view_count: model.view_count,
            upvote_count: model.upvote_count,
            downvote_count: model.downvote_count,
        }
    }
}
