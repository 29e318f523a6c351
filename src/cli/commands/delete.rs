use anyhow::Result;

use super::open_engines;
use crate::cli::DeleteArgs;
use crate::config::Config;

/// Execute the delete command.
///
/// # Errors
///
/// Returns an error if no issue has the given id.
pub fn execute(config: &Config, args: &DeleteArgs, json: bool) -> Result<()> {
    let (_session, mut store) = open_engines(config)?;
    store.delete_issue(&args.id)?;

    if json {
        println!("{}", serde_json::json!({ "deleted": args.id }));
    } else {
        println!("Deleted issue {}.", args.id);
    }
    Ok(())
}
