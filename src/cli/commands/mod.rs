//! Command implementations for the `fx` CLI.
//!
//! Each command opens the durable store fresh, performs one operation
//! against the engines, and prints text or JSON. No state is shared
//! between invocations except through the store.

pub mod dashboard;
pub mod delete;
pub mod list;
pub mod login;
pub mod logout;
pub mod report;
pub mod show;
pub mod status;
pub mod track;
pub mod whoami;

use anyhow::Result;
use fixit_lib::{IssueStore, JsonStore, SessionManager};

use crate::config::Config;

/// Open the durable store and both engines rooted on it.
pub(crate) fn open_engines(config: &Config) -> Result<(SessionManager, IssueStore)> {
    let storage = JsonStore::open(&config.data_dir)?;
    let session = SessionManager::open(storage.clone());
    let store = IssueStore::open(storage);
    Ok((session, store))
}
