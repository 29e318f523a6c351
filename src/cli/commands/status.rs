use anyhow::Result;
use fixit_lib::IssueStatus;

use super::open_engines;
use crate::cli::StatusArgs;
use crate::config::Config;

/// Execute the status command.
///
/// # Errors
///
/// Returns an error if the status value is invalid or no issue has the
/// given id.
pub fn execute(config: &Config, args: &StatusArgs, json: bool) -> Result<()> {
    let status: IssueStatus = args.status.parse()?;

    let (_session, mut store) = open_engines(config)?;
    let issue = store.update_status(&args.id, status)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&issue)?);
    } else {
        println!(
            "{} is now {} ({})",
            issue.tracking_code,
            issue.status,
            status.transition_note()
        );
    }
    Ok(())
}
