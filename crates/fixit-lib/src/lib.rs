//! `fixit-lib` - facility issue lifecycle and persistence engine.
//!
//! Owns the entity model, the status state machine with its audit trail,
//! tracking-code issuance, the durable JSON store, the identity session,
//! and the derived dashboard analytics. Presentation layers (CLI, web)
//! are callers, nothing more.
//!
//! # Quick Start
//!
//! ```no_run
//! use fixit_lib::{IssueDraft, IssueStatus, IssueStore, JsonStore, SessionManager, UserRole};
//!
//! let storage = JsonStore::open(".fixit").unwrap();
//! let mut session = SessionManager::open(storage.clone());
//! let mut store = IssueStore::open(storage);
//!
//! let user = session.login("staff", UserRole::Staff).unwrap();
//! let issue = store
//!     .create_issue(
//!         &IssueDraft {
//!             title: "Corridor light flickering".into(),
//!             description: "Third floor, near the stairwell.".into(),
//!             location: "Building 3, Floor 3".into(),
//!             ..Default::default()
//!         },
//!         Some(&user),
//!     )
//!     .unwrap();
//! println!("track it with {}", issue.tracking_code);
//!
//! store.update_status(&issue.id, IssueStatus::InProgress).unwrap();
//! ```

pub mod analytics;
pub mod error;
pub mod model;
pub mod query;
pub mod seed;
pub mod session;
pub mod storage;
pub mod store;
pub mod tracking;

pub use error::{FixitError, Result};
pub use model::{Issue, IssueCategory, IssueDraft, IssueLog, IssueStatus, User, UserRole};
pub use query::ListFilters;
pub use session::SessionManager;
pub use storage::JsonStore;
pub use store::IssueStore;
