use anyhow::Result;
use chrono::Utc;
use fixit_lib::tracking;

use super::{open_engines, show};
use crate::cli::TrackArgs;
use crate::config::Config;
use crate::format::IssueDetails;

/// Execute the track command: the anonymous lookup path. No session is
/// consulted; the tracking code is the only credential.
///
/// # Errors
///
/// Returns an error if no issue matches the code.
pub fn execute(config: &Config, args: &TrackArgs, json: bool) -> Result<()> {
    let code = tracking::normalize_code(&args.code);

    let (_session, store) = open_engines(config)?;
    let issue = store.find_by_tracking_code(&code)?;

    if json {
        let details = IssueDetails::new(issue, Utc::now());
        println!("{}", serde_json::to_string_pretty(&details)?);
        return Ok(());
    }

    show::print_details(issue);
    Ok(())
}
