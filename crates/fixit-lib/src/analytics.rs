//! Derived operational views over the issue collection.
//!
//! Pure read-only computations for the maintenance dashboard. Nothing is
//! cached; every view is cheap enough to recompute on each read. `now`
//! is an explicit argument so the SLA boundary is testable to the second.

use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};

use crate::model::{Issue, IssueStatus};

/// Hours an open issue may wait before it counts as overdue.
pub const SLA_HOURS: i64 = 48;

/// Title keywords that mark an issue critical regardless of age.
pub const CRITICAL_KEYWORDS: [&str; 3] = ["fire", "power", "leak"];

/// Cap on the personal work queue.
const MY_TASKS_LIMIT: usize = 5;

/// Buckets reported by the building aggregation.
const TOP_BUILDINGS: usize = 5;

/// Wall-clock time since `created_at`.
#[must_use]
pub fn elapsed(created_at: DateTime<Utc>, now: DateTime<Utc>) -> Duration {
    now - created_at
}

/// True when the issue is open and older than the SLA window.
///
/// The threshold is strict: exactly 48h is not yet overdue.
#[must_use]
pub fn is_overdue(issue: &Issue, now: DateTime<Utc>) -> bool {
    issue.status.is_open() && elapsed(issue.created_at, now) > Duration::hours(SLA_HOURS)
}

/// Open issues that are overdue or keyword-flagged, oldest first so the
/// longest-waiting critical issue surfaces on top.
#[must_use]
pub fn critical_tasks(issues: &[Issue], now: DateTime<Utc>) -> Vec<&Issue> {
    let mut critical: Vec<&Issue> = issues
        .iter()
        .filter(|issue| {
            issue.status.is_open() && (is_overdue(issue, now) || has_critical_keyword(&issue.title))
        })
        .collect();
    critical.sort_by_key(|issue| issue.created_at);
    critical
}

fn has_critical_keyword(title: &str) -> bool {
    let title = title.to_lowercase();
    CRITICAL_KEYWORDS.iter().any(|kw| title.contains(kw))
}

/// Open issues past the SLA window, in collection order.
#[must_use]
pub fn over_sla_tasks(issues: &[Issue], now: DateTime<Utc>) -> Vec<&Issue> {
    issues
        .iter()
        .filter(|issue| is_overdue(issue, now))
        .collect()
}

/// Per-building counts of open issues: top five buckets, most loaded
/// first, ties broken lexicographically by bucket name.
#[must_use]
pub fn building_aggregate(issues: &[Issue]) -> Vec<(String, usize)> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    for issue in issues.iter().filter(|issue| issue.status.is_open()) {
        *counts.entry(building_bucket(&issue.location)).or_insert(0) += 1;
    }

    let mut buckets: Vec<(String, usize)> = counts.into_iter().collect();
    buckets.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
    buckets.truncate(TOP_BUILDINGS);
    buckets
}

/// Heuristic bucket key for a free-form location string: up to the first
/// two whitespace tokens of the first comma-delimited segment, joined by
/// a single space. "Building 1, Room 301" buckets as "Building 1";
/// "Main Library, 2nd Floor" as "Main Library".
#[must_use]
pub fn building_bucket(location: &str) -> String {
    let segment = location.split(',').next().unwrap_or(location);
    segment
        .split_whitespace()
        .take(2)
        .collect::<Vec<_>>()
        .join(" ")
}

/// In-progress issues, capped to the first five in collection order.
///
/// Stands in for per-staff assignment, which the data model does not
/// carry.
#[must_use]
pub fn my_open_tasks(issues: &[Issue]) -> Vec<&Issue> {
    issues
        .iter()
        .filter(|issue| issue.status == IssueStatus::InProgress)
        .take(MY_TASKS_LIMIT)
        .collect()
}

/// (active, done) counts for the dashboard header.
#[must_use]
pub fn status_totals(issues: &[Issue]) -> (usize, usize) {
    let done = issues.iter().filter(|issue| issue.status.is_done()).count();
    (issues.len() - done, done)
}
