use anyhow::Result;
use fixit_lib::{JsonStore, SessionManager};

use crate::config::Config;

/// Execute the logout command.
///
/// # Errors
///
/// Returns an error if the persisted session cannot be removed.
pub fn execute(config: &Config, json: bool) -> Result<()> {
    let storage = JsonStore::open(&config.data_dir)?;
    let mut session = SessionManager::open(storage);
    session.logout()?;

    if json {
        println!("{}", serde_json::json!({ "signedIn": false }));
    } else {
        println!("Signed out.");
    }
    Ok(())
}
