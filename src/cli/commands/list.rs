use std::str::FromStr;

use anyhow::Result;
use fixit_lib::{Issue, IssueCategory, IssueStatus, ListFilters};

use super::open_engines;
use crate::cli::ListArgs;
use crate::config::Config;
use crate::format;

/// Execute the list command.
///
/// # Errors
///
/// Returns an error if a filter value is invalid.
pub fn execute(config: &Config, args: &ListArgs, json: bool) -> Result<()> {
    let filters = ListFilters {
        status: args.status.as_deref().map(IssueStatus::from_str).transpose()?,
        category: args
            .category
            .as_deref()
            .map(IssueCategory::from_str)
            .transpose()?,
        search: args.search.clone(),
        limit: args.limit,
    };

    let (_session, store) = open_engines(config)?;
    let issues = store.list_issues(&filters);

    if json {
        let owned: Vec<Issue> = issues.iter().map(|issue| (*issue).clone()).collect();
        println!("{}", serde_json::to_string_pretty(&owned)?);
        return Ok(());
    }

    if issues.is_empty() {
        println!("No issues match.");
        return Ok(());
    }

    for issue in issues {
        println!("{}  (id {})", format::format_issue_line(issue), issue.id);
    }
    Ok(())
}
