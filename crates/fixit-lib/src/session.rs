//! Identity session management.
//!
//! Login is identity selection, not authentication: a known username
//! resolves to its seeded account (keeping that account's role, whatever
//! the caller asked for) and an unknown username mints an ephemeral
//! user. The active session is durable across process restarts.

use chrono::{DateTime, Utc};
use tracing::{info, warn};

use crate::error::Result;
use crate::model::{User, UserRole};
use crate::seed;
use crate::storage::{JsonStore, SESSION_KEY};

/// The active user identity plus its durable backing.
pub struct SessionManager {
    current: Option<User>,
    storage: JsonStore,
}

impl SessionManager {
    /// Restore the persisted session.
    ///
    /// Absent or unreadable stored state means "signed out", never a
    /// failure.
    #[must_use]
    pub fn open(storage: JsonStore) -> Self {
        let current = match storage.get::<User>(SESSION_KEY) {
            Ok(user) => user,
            Err(err) => {
                warn!(%err, "stored session unreadable, starting signed out");
                None
            }
        };
        Self { current, storage }
    }

    /// Start a session for `username`.
    ///
    /// A known seeded account wins and keeps its pre-assigned role;
    /// otherwise a fresh ephemeral user carries the supplied role. Always
    /// succeeds; identity selection, not authentication.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the session cannot be persisted.
    pub fn login(&mut self, username: &str, role: UserRole) -> Result<User> {
        let user = seed::known_accounts()
            .into_iter()
            .find(|account| account.username == username)
            .unwrap_or_else(|| synthesize_user(username, role, Utc::now()));

        self.storage.put(SESSION_KEY, &user)?;
        info!(username = %user.username, role = %user.role, "session started");
        self.current = Some(user.clone());
        Ok(user)
    }

    /// End the active session and remove it from durable storage.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the persisted record cannot be removed.
    pub fn logout(&mut self) -> Result<()> {
        if let Some(user) = self.current.take() {
            info!(username = %user.username, "session ended");
        }
        self.storage.delete(SESSION_KEY)
    }

    /// The active user, if anyone is signed in.
    #[must_use]
    pub fn current_user(&self) -> Option<&User> {
        self.current.as_ref()
    }
}

fn synthesize_user(username: &str, role: UserRole, now: DateTime<Utc>) -> User {
    User {
        id: format!("u-{}", now.timestamp_millis()),
        username: username.to_string(),
        full_name: if username == "admin" {
            "System Admin".to_string()
        } else {
            "New User".to_string()
        },
        role,
    }
}
