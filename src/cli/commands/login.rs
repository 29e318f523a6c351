use anyhow::Result;
use fixit_lib::{JsonStore, SessionManager, UserRole};

use crate::cli::LoginArgs;
use crate::config::Config;

/// Execute the login command.
///
/// # Errors
///
/// Returns an error if the role is invalid or the session cannot be
/// persisted.
pub fn execute(config: &Config, args: &LoginArgs, json: bool) -> Result<()> {
    let role: UserRole = args.role.parse()?;

    let storage = JsonStore::open(&config.data_dir)?;
    let mut session = SessionManager::open(storage);
    let user = session.login(&args.username, role)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&user)?);
    } else {
        println!("Signed in as {} ({})", user.full_name, user.role);
    }
    Ok(())
}
