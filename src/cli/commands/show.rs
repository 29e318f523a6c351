use anyhow::Result;
use chrono::Utc;
use fixit_lib::{Issue, analytics};

use super::open_engines;
use crate::cli::ShowArgs;
use crate::config::Config;
use crate::format::{self, IssueDetails};

/// Execute the show command.
///
/// # Errors
///
/// Returns an error if no issue has the given id.
pub fn execute(config: &Config, args: &ShowArgs, json: bool) -> Result<()> {
    let (_session, store) = open_engines(config)?;
    let issue = store.get_issue(&args.id)?;

    if json {
        let details = IssueDetails::new(issue, Utc::now());
        println!("{}", serde_json::to_string_pretty(&details)?);
        return Ok(());
    }

    print_details(issue);
    Ok(())
}

pub(crate) fn print_details(issue: &Issue) {
    let now = Utc::now();
    println!("{}", format::format_issue_line(issue));
    println!(
        "  reported by {} ({} ago)",
        issue.reporter_name,
        format::format_elapsed(analytics::elapsed(issue.created_at, now))
    );
    println!("  {}", issue.description);
    if let Some(url) = &issue.image_url {
        println!("  photo: {url}");
    }
    if analytics::is_overdue(issue, now) {
        println!("  ⚠ over SLA ({}h)", analytics::SLA_HOURS);
    }

    println!("  History:");
    for log in &issue.logs {
        println!(
            "    {:<12} {}  {}",
            log.status.as_str(),
            log.timestamp.format("%Y-%m-%d %H:%M UTC"),
            log.note.as_deref().unwrap_or("-")
        );
    }
}
