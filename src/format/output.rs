//! JSON view types for `--json` output.

use chrono::{DateTime, Utc};
use fixit_lib::{Issue, analytics};
use serde::{Deserialize, Serialize};

/// Issue with derived SLA fields, for show/track views.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IssueDetails {
    #[serde(flatten)]
    pub issue: Issue,
    pub elapsed_hours: i64,
    pub overdue: bool,
}

impl IssueDetails {
    #[must_use]
    pub fn new(issue: &Issue, now: DateTime<Utc>) -> Self {
        Self {
            issue: issue.clone(),
            elapsed_hours: analytics::elapsed(issue.created_at, now).num_hours(),
            overdue: analytics::is_overdue(issue, now),
        }
    }
}

/// One bucket of the building aggregation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildingLoad {
    pub building: String,
    pub count: usize,
}

/// Dashboard snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardView {
    pub total_active: usize,
    pub total_done: usize,
    pub critical: Vec<Issue>,
    pub my_tasks: Vec<Issue>,
    pub over_sla: Vec<Issue>,
    pub buildings: Vec<BuildingLoad>,
}

impl DashboardView {
    /// Assemble every dashboard section from the current collection.
    #[must_use]
    pub fn compute(issues: &[Issue], now: DateTime<Utc>) -> Self {
        let (total_active, total_done) = analytics::status_totals(issues);
        Self {
            total_active,
            total_done,
            critical: clone_all(&analytics::critical_tasks(issues, now)),
            my_tasks: clone_all(&analytics::my_open_tasks(issues)),
            over_sla: clone_all(&analytics::over_sla_tasks(issues, now)),
            buildings: analytics::building_aggregate(issues)
                .into_iter()
                .map(|(building, count)| BuildingLoad { building, count })
                .collect(),
        }
    }
}

fn clone_all(issues: &[&Issue]) -> Vec<Issue> {
    issues.iter().map(|issue| (*issue).clone()).collect()
}
