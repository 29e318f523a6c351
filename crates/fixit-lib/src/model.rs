//! Core data types for fixit-lib.
//!
//! Serialized field names and enum tags match the durable-store records
//! (`trackingCode`, `PENDING`, `STAFF`, ...) so stored collections stay
//! readable across front-end rewrites.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Account role.
///
/// Roles gate nothing inside the engine; they are carried for the
/// presentation layer, which decides who sees staff tooling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    #[default]
    Student,
    Staff,
    Admin,
}

impl UserRole {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Student => "STUDENT",
            Self::Staff => "STAFF",
            Self::Admin => "ADMIN",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = crate::error::FixitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "student" => Ok(Self::Student),
            "staff" => Ok(Self::Staff),
            "admin" => Ok(Self::Admin),
            other => Err(crate::error::FixitError::InvalidRole {
                role: other.to_string(),
            }),
        }
    }
}

/// Issue lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IssueStatus {
    #[default]
    Pending,
    InProgress,
    Done,
}

impl IssueStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::InProgress => "IN_PROGRESS",
            Self::Done => "DONE",
        }
    }

    #[must_use]
    pub const fn is_done(self) -> bool {
        matches!(self, Self::Done)
    }

    #[must_use]
    pub const fn is_open(self) -> bool {
        !self.is_done()
    }

    /// Explicit transition table. Every pair is currently legal:
    /// re-applying the current status and reopening DONE issues are both
    /// recorded workflows.
    #[must_use]
    #[allow(clippy::match_same_arms)]
    pub const fn can_transition_to(self, next: Self) -> bool {
        match (self, next) {
            (Self::Pending, Self::Pending | Self::InProgress | Self::Done) => true,
            (Self::InProgress, Self::Pending | Self::InProgress | Self::Done) => true,
            (Self::Done, Self::Pending | Self::InProgress | Self::Done) => true,
        }
    }

    /// Audit note recorded when an issue is moved to this status.
    #[must_use]
    pub const fn transition_note(self) -> &'static str {
        match self {
            Self::Pending => "Reopened for review",
            Self::InProgress => "Technician assigned",
            Self::Done => "Issue resolved",
        }
    }
}

impl fmt::Display for IssueStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for IssueStatus {
    type Err = crate::error::FixitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "in_progress" | "in-progress" | "inprogress" => Ok(Self::InProgress),
            "done" => Ok(Self::Done),
            other => Err(crate::error::FixitError::InvalidStatus {
                status: other.to_string(),
            }),
        }
    }
}

/// Issue category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IssueCategory {
    #[default]
    Facility,
    Electricity,
    Internet,
    Equipment,
    Traffic,
    Other,
}

impl IssueCategory {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Facility => "FACILITY",
            Self::Electricity => "ELECTRICITY",
            Self::Internet => "INTERNET",
            Self::Equipment => "EQUIPMENT",
            Self::Traffic => "TRAFFIC",
            Self::Other => "OTHER",
        }
    }

    /// Human-facing label for list and detail views.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Facility => "Facilities",
            Self::Electricity => "Electricity/Lighting",
            Self::Internet => "Internet/Wi-Fi",
            Self::Equipment => "Classroom Equipment",
            Self::Traffic => "Traffic/Parking",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for IssueCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for IssueCategory {
    type Err = crate::error::FixitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "facility" | "facilities" => Ok(Self::Facility),
            "electricity" | "lighting" => Ok(Self::Electricity),
            "internet" | "wifi" | "wi-fi" => Ok(Self::Internet),
            "equipment" => Ok(Self::Equipment),
            "traffic" | "parking" => Ok(Self::Traffic),
            "other" => Ok(Self::Other),
            other => Err(crate::error::FixitError::InvalidCategory {
                category: other.to_string(),
            }),
        }
    }
}

/// A reporter or staff identity.
///
/// Immutable once created; `id` is the identity key.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub username: String,
    pub full_name: String,
    pub role: UserRole,
}

/// One immutable audit entry: a status the issue held, when, and why.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct IssueLog {
    pub status: IssueStatus,
    pub timestamp: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// The primary issue entity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
    /// Internal identifier; assigned at creation, never reused.
    pub id: String,

    /// Public identifier (`PSU-YYYY-NNNNNN`) for anonymous lookup.
    pub tracking_code: String,

    pub title: String,
    pub description: String,
    pub category: IssueCategory,

    /// Free-form location ("Building 1, Room 301").
    pub location: String,

    /// Derived field, kept equal to the status of the last log entry.
    pub status: IssueStatus,

    pub reporter_id: String,
    pub reporter_name: String,

    /// Timestamp of the first log entry.
    pub created_at: DateTime<Utc>,

    /// Opaque photo reference; upload handling lives elsewhere.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,

    /// Append-only status history, oldest first. Never empty.
    #[serde(default)]
    pub logs: Vec<IssueLog>,
}

impl Issue {
    /// Status recorded by the most recent audit entry.
    ///
    /// The store keeps the `status` field in lockstep with this.
    #[must_use]
    pub fn logged_status(&self) -> Option<IssueStatus> {
        self.logs.last().map(|log| log.status)
    }
}

/// Reporter-supplied fields for a new issue.
///
/// Identity, status, and audit fields are assigned by the store.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueDraft {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub category: IssueCategory,
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_status_serde_tags() {
        assert_eq!(
            serde_json::to_string(&IssueStatus::InProgress).unwrap(),
            "\"IN_PROGRESS\""
        );
        let parsed: IssueStatus = serde_json::from_str("\"PENDING\"").unwrap();
        assert_eq!(parsed, IssueStatus::Pending);
    }

    #[test]
    fn test_role_serde_tags() {
        assert_eq!(
            serde_json::to_string(&UserRole::Staff).unwrap(),
            "\"STAFF\""
        );
        let parsed: UserRole = serde_json::from_str("\"ADMIN\"").unwrap();
        assert_eq!(parsed, UserRole::Admin);
    }

    #[test]
    fn test_status_from_str_aliases() {
        assert_eq!(
            "in-progress".parse::<IssueStatus>().unwrap(),
            IssueStatus::InProgress
        );
        assert_eq!("DONE".parse::<IssueStatus>().unwrap(), IssueStatus::Done);
        assert!("closed".parse::<IssueStatus>().is_err());
    }

    #[test]
    fn test_transition_table_admits_every_pair() {
        let all = [
            IssueStatus::Pending,
            IssueStatus::InProgress,
            IssueStatus::Done,
        ];
        for from in all {
            for to in all {
                assert!(from.can_transition_to(to), "{from} -> {to} should be legal");
            }
        }
    }

    #[test]
    fn test_transition_notes_are_distinct() {
        let notes = [
            IssueStatus::Pending.transition_note(),
            IssueStatus::InProgress.transition_note(),
            IssueStatus::Done.transition_note(),
        ];
        assert_ne!(notes[0], notes[1]);
        assert_ne!(notes[1], notes[2]);
        assert_ne!(notes[0], notes[2]);
    }

    #[test]
    fn test_issue_field_names_are_camel_case() {
        let created_at = chrono::Utc.with_ymd_and_hms(2026, 1, 10, 8, 0, 0).unwrap();
        let issue = Issue {
            id: "1".to_string(),
            tracking_code: "PSU-2026-123456".to_string(),
            title: "Broken light".to_string(),
            description: "Flickering".to_string(),
            category: IssueCategory::Electricity,
            location: "Building 3".to_string(),
            status: IssueStatus::Pending,
            reporter_id: "u1".to_string(),
            reporter_name: "Somchai Student".to_string(),
            created_at,
            image_url: None,
            logs: vec![IssueLog {
                status: IssueStatus::Pending,
                timestamp: created_at,
                note: Some("Issue reported".to_string()),
            }],
        };

        let json = serde_json::to_string(&issue).unwrap();
        assert!(json.contains("\"trackingCode\""));
        assert!(json.contains("\"reporterName\""));
        assert!(json.contains("\"createdAt\""));
        assert!(!json.contains("\"imageUrl\""), "absent imageUrl is omitted");

        let back: Issue = serde_json::from_str(&json).unwrap();
        assert_eq!(back, issue);
    }

    #[test]
    fn test_logged_status_tracks_last_entry() {
        let created_at = chrono::Utc.with_ymd_and_hms(2026, 1, 10, 8, 0, 0).unwrap();
        let mut issue = Issue {
            id: "1".to_string(),
            tracking_code: "PSU-2026-123456".to_string(),
            title: "t".to_string(),
            description: "d".to_string(),
            category: IssueCategory::Other,
            location: "l".to_string(),
            status: IssueStatus::Pending,
            reporter_id: "u1".to_string(),
            reporter_name: "n".to_string(),
            created_at,
            image_url: None,
            logs: vec![IssueLog {
                status: IssueStatus::Pending,
                timestamp: created_at,
                note: None,
            }],
        };
        assert_eq!(issue.logged_status(), Some(IssueStatus::Pending));

        issue.logs.push(IssueLog {
            status: IssueStatus::Done,
            timestamp: created_at,
            note: None,
        });
        assert_eq!(issue.logged_status(), Some(IssueStatus::Done));
    }
}
