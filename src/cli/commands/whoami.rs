use anyhow::Result;
use fixit_lib::{JsonStore, SessionManager};

use crate::config::Config;

/// Execute the whoami command.
///
/// # Errors
///
/// Returns an error if the store directory cannot be opened.
pub fn execute(config: &Config, json: bool) -> Result<()> {
    let storage = JsonStore::open(&config.data_dir)?;
    let session = SessionManager::open(storage);

    if json {
        println!("{}", serde_json::to_string_pretty(&session.current_user())?);
        return Ok(());
    }

    match session.current_user() {
        Some(user) => println!(
            "{} ({}, {})",
            user.username, user.full_name, user.role
        ),
        None => println!("Not signed in."),
    }
    Ok(())
}
