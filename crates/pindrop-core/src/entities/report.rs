//! Report entity - a located issue filed by a user

use chrono::{DateTime, Utc};

use crate::value_objects::{ReportId, UserId};

/// Issue report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub id: ReportId,
    pub user_id: UserId,
    pub title: String,
    pub location: String,
    /// Landmarks or tips for finding the location
    pub directions: String,
    pub description: String,
    pub timestamp: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Report {
    #[inline]
    pub fn is_owned_by(&self, user_id: UserId) -> bool {
        self.user_id == user_id
    }

    #[inline]
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }

    /// Overwrite the fields present in `changes`
    pub fn apply(&mut self, changes: ReportChanges) {
        if let Some(title) = changes.title {
            self.title = title;
        }
        if let Some(location) = changes.location {
            self.location = location;
        }
        if let Some(directions) = changes.directions {
            self.directions = directions;
        }
        if let Some(description) = changes.description {
            self.description = description;
        }
    }
}

/// Fields of a report about to be filed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReport {
    pub user_id: UserId,
    pub title: String,
    pub location: String,
    pub directions: String,
    pub description: String,
}

/// Partial edit of a report; `None` leaves a field as it is
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportChanges {
    pub title: Option<String>,
    pub location: Option<String>,
    pub directions: Option<String>,
    pub description: Option<String>,
}

impl ReportChanges {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.location.is_none()
            && self.directions.is_none()
            && self.description.is_none()
    }
}
