//! Filter types for issue listing.

use crate::model::{IssueCategory, IssueStatus};

/// Filter options for listing issues.
///
/// All fields are conjunctive; `None` means "don't filter on this".
#[derive(Debug, Clone, Default)]
pub struct ListFilters {
    pub status: Option<IssueStatus>,
    pub category: Option<IssueCategory>,
    /// Case-insensitive substring match on title or location.
    pub search: Option<String>,
    pub limit: Option<usize>,
}
