//! Issue store and status transition engine.
//!
//! Owns the authoritative issue collection, newest first. Every mutation
//! rewrites the whole collection to the durable store; startup loads the
//! stored collection or falls back to the seed set.

use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use crate::error::{FixitError, Result, ValidationError};
use crate::model::{Issue, IssueDraft, IssueLog, IssueStatus, User};
use crate::query::ListFilters;
use crate::seed;
use crate::storage::{ISSUES_KEY, JsonStore};
use crate::tracking;

/// Audit note attached to the creation log entry.
const REPORTED_NOTE: &str = "Issue reported";

/// Reporter placeholder when nobody is signed in.
const ANONYMOUS_NAME: &str = "Anonymous";

/// Authoritative issue collection plus its durable backing.
pub struct IssueStore {
    issues: Vec<Issue>,
    storage: JsonStore,
}

impl IssueStore {
    // ========================================================================
    // Lifecycle
    // ========================================================================

    /// Create a store with an empty collection.
    #[must_use]
    pub const fn new(storage: JsonStore) -> Self {
        Self {
            issues: Vec::new(),
            storage,
        }
    }

    /// Load the persisted collection.
    ///
    /// Absent or unreadable state falls back to the seed set, never to
    /// an empty collection.
    #[must_use]
    pub fn open(storage: JsonStore) -> Self {
        let issues = match storage.get::<Vec<Issue>>(ISSUES_KEY) {
            Ok(Some(issues)) => issues,
            Ok(None) => seed::seed_issues(Utc::now()),
            Err(err) => {
                warn!(%err, "stored issue collection unreadable, reseeding");
                seed::seed_issues(Utc::now())
            }
        };
        Self { issues, storage }
    }

    // ========================================================================
    // CRUD
    // ========================================================================

    /// Create an issue from a reporter-supplied draft.
    ///
    /// Assigns id, a unique tracking code, the creation timestamp,
    /// reporter identity from `reporter` (or the Anonymous placeholder),
    /// PENDING status, and the first audit entry, then prepends the
    /// issue and persists the collection. Returns the populated issue so
    /// the caller can show the tracking code immediately.
    ///
    /// # Errors
    ///
    /// Returns `Validation`/`ValidationErrors` for an incomplete draft,
    /// `TrackingCodeExhausted` if no unique code could be minted, or a
    /// storage error if the collection cannot be persisted.
    pub fn create_issue(&mut self, draft: &IssueDraft, reporter: Option<&User>) -> Result<Issue> {
        validate_draft(draft)?;

        let now = Utc::now();
        let tracking_code = tracking::generate(now, |code| {
            self.issues
                .iter()
                .any(|issue| issue.tracking_code.eq_ignore_ascii_case(code))
        })?;

        let issue = Issue {
            id: self.next_id(now),
            tracking_code,
            title: draft.title.trim().to_string(),
            description: draft.description.trim().to_string(),
            category: draft.category,
            location: draft.location.trim().to_string(),
            status: IssueStatus::Pending,
            reporter_id: reporter.map_or_else(|| "anonymous".to_string(), |u| u.id.clone()),
            reporter_name: reporter
                .map_or_else(|| ANONYMOUS_NAME.to_string(), |u| u.full_name.clone()),
            created_at: now,
            image_url: draft.image_url.clone().filter(|url| !url.trim().is_empty()),
            logs: vec![IssueLog {
                status: IssueStatus::Pending,
                timestamp: now,
                note: Some(REPORTED_NOTE.to_string()),
            }],
        };

        debug!(id = %issue.id, code = %issue.tracking_code, "issue created");
        self.issues.insert(0, issue.clone());
        self.persist()?;
        Ok(issue)
    }

    /// Apply a status transition: append the audit entry, update the
    /// derived status field, persist.
    ///
    /// Backward transitions (DONE back to PENDING) are legal reopen
    /// workflows and are recorded like any other.
    ///
    /// # Errors
    ///
    /// Returns `IssueNotFound` for an unknown id or
    /// `TransitionNotAllowed` if the transition table rejects the change.
    pub fn update_status(&mut self, id: &str, status: IssueStatus) -> Result<Issue> {
        let issue = self
            .issues
            .iter_mut()
            .find(|issue| issue.id == id)
            .ok_or_else(|| FixitError::IssueNotFound { id: id.to_string() })?;

        if !issue.status.can_transition_to(status) {
            return Err(FixitError::TransitionNotAllowed {
                from: issue.status.to_string(),
                to: status.to_string(),
            });
        }

        issue.logs.push(IssueLog {
            status,
            timestamp: Utc::now(),
            note: Some(status.transition_note().to_string()),
        });
        issue.status = status;
        let updated = issue.clone();

        debug!(id = %updated.id, status = %updated.status, "status updated");
        self.persist()?;
        Ok(updated)
    }

    /// Remove an issue entirely. Hard delete; there is no tombstone.
    ///
    /// # Errors
    ///
    /// Returns `IssueNotFound` for an unknown id.
    pub fn delete_issue(&mut self, id: &str) -> Result<()> {
        let before = self.issues.len();
        self.issues.retain(|issue| issue.id != id);
        if self.issues.len() == before {
            return Err(FixitError::IssueNotFound { id: id.to_string() });
        }

        debug!(id, "issue deleted");
        self.persist()
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Get a single issue by id.
    ///
    /// # Errors
    ///
    /// Returns `IssueNotFound` if the issue doesn't exist.
    pub fn get_issue(&self, id: &str) -> Result<&Issue> {
        self.issues
            .iter()
            .find(|issue| issue.id == id)
            .ok_or_else(|| FixitError::IssueNotFound { id: id.to_string() })
    }

    /// Look up an issue by its public tracking code, case-insensitively.
    ///
    /// Read-only; a miss is an expected condition, not a fault.
    ///
    /// # Errors
    ///
    /// Returns `TrackingCodeNotFound` when nothing matches.
    pub fn find_by_tracking_code(&self, code: &str) -> Result<&Issue> {
        let code = code.trim();
        self.issues
            .iter()
            .find(|issue| issue.tracking_code.eq_ignore_ascii_case(code))
            .ok_or_else(|| FixitError::TrackingCodeNotFound {
                code: tracking::normalize_code(code),
            })
    }

    /// The full collection, newest created first.
    #[must_use]
    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }

    /// List issues matching the filters, in collection order.
    #[must_use]
    pub fn list_issues(&self, filters: &ListFilters) -> Vec<&Issue> {
        let mut results: Vec<&Issue> = self
            .issues
            .iter()
            .filter(|issue| Self::matches_filters(issue, filters))
            .collect();

        if let Some(limit) = filters.limit {
            results.truncate(limit);
        }

        results
    }

    /// Total number of issues.
    #[must_use]
    pub fn len(&self) -> usize {
        self.issues.len()
    }

    /// Check if the collection is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    // ========================================================================
    // Internal Helpers
    // ========================================================================

    /// Millisecond timestamp as a string, bumped past any id already in
    /// use. Ids are never reused even within the same millisecond.
    fn next_id(&self, now: DateTime<Utc>) -> String {
        let mut candidate = now.timestamp_millis();
        loop {
            let id = candidate.to_string();
            if !self.issues.iter().any(|issue| issue.id == id) {
                return id;
            }
            candidate += 1;
        }
    }

    fn matches_filters(issue: &Issue, filters: &ListFilters) -> bool {
        if let Some(status) = filters.status {
            if issue.status != status {
                return false;
            }
        }

        if let Some(category) = filters.category {
            if issue.category != category {
                return false;
            }
        }

        if let Some(ref query) = filters.search {
            let query = query.to_lowercase();
            if !issue.title.to_lowercase().contains(&query)
                && !issue.location.to_lowercase().contains(&query)
            {
                return false;
            }
        }

        true
    }

    fn persist(&self) -> Result<()> {
        self.storage.put(ISSUES_KEY, &self.issues)
    }
}

fn validate_draft(draft: &IssueDraft) -> Result<()> {
    let mut errors = Vec::new();

    if draft.title.trim().is_empty() {
        errors.push(ValidationError::new("title", "cannot be empty"));
    }
    if draft.title.len() > 200 {
        errors.push(ValidationError::new("title", "exceeds 200 characters"));
    }
    if draft.description.trim().is_empty() {
        errors.push(ValidationError::new("description", "cannot be empty"));
    }
    if draft.location.trim().is_empty() {
        errors.push(ValidationError::new("location", "cannot be empty"));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(FixitError::from_validation_errors(errors))
    }
}
