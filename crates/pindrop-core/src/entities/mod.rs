//! Domain entities - core business objects

mod report;
mod report_stats;
mod user;
mod vote;

pub use report::{NewReport, Report, ReportChanges};
pub use report_stats::ReportStats;
pub use user::{NewUser, User};
pub use vote::{current_state, Vote};
