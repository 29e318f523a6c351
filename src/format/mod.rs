//! Output formatting for `fixit_rust`.
//!
//! Supports human-readable text output and machine-parseable JSON
//! (`--json` sends clean JSON to stdout with diagnostics on stderr).

mod output;
mod text;

pub use output::{BuildingLoad, DashboardView, IssueDetails};
pub use text::{format_elapsed, format_issue_line, format_status_icon};
