use anyhow::Result;
use fixit_lib::{IssueCategory, IssueDraft};

use super::open_engines;
use crate::cli::ReportArgs;
use crate::config::Config;

/// Execute the report command.
///
/// # Errors
///
/// Returns an error if validation fails or the issue cannot be created.
pub fn execute(config: &Config, args: &ReportArgs, json: bool) -> Result<()> {
    let category: IssueCategory = args.category.parse()?;

    let (session, mut store) = open_engines(config)?;

    let draft = IssueDraft {
        title: args.title.clone(),
        description: args.description.clone(),
        category,
        location: args.location.clone(),
        image_url: args.image.clone(),
    };

    let issue = store.create_issue(&draft, session.current_user())?;

    if json {
        println!("{}", serde_json::to_string_pretty(&issue)?);
    } else {
        println!("Reported {}: {}", issue.tracking_code, issue.title);
        println!(
            "Check progress anytime with: fx track {}",
            issue.tracking_code
        );
    }
    Ok(())
}
