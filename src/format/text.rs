//! Text formatting functions for `fixit_rust`.
//!
//! Plain text (non-ANSI) formatting for terminal output: status icons,
//! single-line issue summaries, and elapsed-time rendering.

use chrono::Duration;
use fixit_lib::{Issue, IssueStatus};

/// Status icon characters.
pub mod icons {
    /// Pending - reported, waiting for staff (hollow circle).
    pub const PENDING: &str = "○";
    /// In progress - a technician is on it (half-filled).
    pub const IN_PROGRESS: &str = "◐";
    /// Done - resolved (checkmark).
    pub const DONE: &str = "✓";
}

/// Return the icon character for a status.
#[must_use]
pub const fn format_status_icon(status: IssueStatus) -> &'static str {
    match status {
        IssueStatus::Pending => icons::PENDING,
        IssueStatus::InProgress => icons::IN_PROGRESS,
        IssueStatus::Done => icons::DONE,
    }
}

/// Format a single-line issue summary.
///
/// Format: `{icon} {tracking code} [{category}] {title} ({location})`
#[must_use]
pub fn format_issue_line(issue: &Issue) -> String {
    format!(
        "{} {} [{}] {} ({})",
        format_status_icon(issue.status),
        issue.tracking_code,
        issue.category.label(),
        issue.title,
        issue.location,
    )
}

/// Render an elapsed duration the way the dashboard reads it: hours up
/// to two days, whole days beyond that.
#[must_use]
pub fn format_elapsed(elapsed: Duration) -> String {
    let hours = elapsed.num_hours().max(0);
    if hours > 48 {
        format!("{}d", elapsed.num_days())
    } else {
        format!("{hours}h")
    }
}
