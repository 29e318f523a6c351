//! Seeded demo data.
//!
//! The known login accounts, and the issue collection used when the
//! durable store has nothing (or nothing readable) under the issues key.
//! Timestamps are relative to the load instant so the dashboard always
//! has one over-SLA issue and one fresh one to show.

use chrono::{DateTime, Duration, Utc};

use crate::model::{Issue, IssueCategory, IssueLog, IssueStatus, User, UserRole};

/// Accounts that `login` resolves by username, keeping their fixed role.
#[must_use]
pub fn known_accounts() -> Vec<User> {
    vec![
        User {
            id: "u1".to_string(),
            username: "student".to_string(),
            full_name: "Somchai Student".to_string(),
            role: UserRole::Student,
        },
        User {
            id: "u2".to_string(),
            username: "staff".to_string(),
            full_name: "Ajarn Somsri".to_string(),
            role: UserRole::Staff,
        },
        User {
            id: "u3".to_string(),
            username: "admin".to_string(),
            full_name: "Admin System".to_string(),
            role: UserRole::Admin,
        },
    ]
}

fn log(status: IssueStatus, timestamp: DateTime<Utc>, note: &str) -> IssueLog {
    IssueLog {
        status,
        timestamp,
        note: Some(note.to_string()),
    }
}

/// The fallback issue collection, newest-first like the live one.
#[must_use]
pub fn seed_issues(now: DateTime<Utc>) -> Vec<Issue> {
    vec![
        Issue {
            id: "1".to_string(),
            tracking_code: "PSU-2024-001001".to_string(),
            title: "Air conditioner broken in Room 301".to_string(),
            description: "The air conditioner is making a loud noise and not cooling.".to_string(),
            category: IssueCategory::Facility,
            location: "Building 1, Room 301".to_string(),
            status: IssueStatus::Pending,
            reporter_id: "u1".to_string(),
            reporter_name: "Somchai Student".to_string(),
            created_at: now - Duration::days(2),
            image_url: Some(
                "https://images.unsplash.com/photo-1574966739987-65e38a0b024e?q=80&w=800"
                    .to_string(),
            ),
            logs: vec![log(
                IssueStatus::Pending,
                now - Duration::days(2),
                "Issue reported",
            )],
        },
        Issue {
            id: "2".to_string(),
            tracking_code: "PSU-2024-001002".to_string(),
            title: "Wi-Fi keeps dropping at Library".to_string(),
            description: "Cannot connect to PSU-WiFi-5G on the 2nd floor.".to_string(),
            category: IssueCategory::Internet,
            location: "Main Library, 2nd Floor".to_string(),
            status: IssueStatus::InProgress,
            reporter_id: "u1".to_string(),
            reporter_name: "Somchai Student".to_string(),
            created_at: now - Duration::days(1),
            image_url: Some(
                "https://images.unsplash.com/photo-1544197150-b99a580bbc7c?q=80&w=800".to_string(),
            ),
            logs: vec![
                log(IssueStatus::Pending, now - Duration::days(1), "Issue reported"),
                log(
                    IssueStatus::InProgress,
                    now - Duration::hours(12),
                    "Technician assigned",
                ),
            ],
        },
        Issue {
            id: "3".to_string(),
            tracking_code: "PSU-2024-000555".to_string(),
            title: "Projector bulb burnout".to_string(),
            description: "The projector in the large lecture hall is very dim.".to_string(),
            category: IssueCategory::Equipment,
            location: "Engineering Bldg, Hall A".to_string(),
            status: IssueStatus::Done,
            reporter_id: "u2".to_string(),
            reporter_name: "Ajarn Somsri".to_string(),
            created_at: now - Duration::days(5),
            image_url: Some(
                "https://images.unsplash.com/photo-1531403009284-440f080d1e12?q=80&w=800"
                    .to_string(),
            ),
            logs: vec![
                log(IssueStatus::Pending, now - Duration::days(5), "Issue reported"),
                log(
                    IssueStatus::InProgress,
                    now - Duration::days(3),
                    "Ordered new bulb",
                ),
                log(IssueStatus::Done, now - Duration::days(1), "Replaced bulb"),
            ],
        },
        Issue {
            id: "4".to_string(),
            tracking_code: "PSU-2024-001234".to_string(),
            title: "Motorbikes blocking Canteen entrance".to_string(),
            description: "Many motorbikes are parked in the no-parking zone blocking the \
                          entrance to the canteen. Please arrange more parking space."
                .to_string(),
            category: IssueCategory::Traffic,
            location: "Student Canteen (Rong Chang)".to_string(),
            status: IssueStatus::Pending,
            reporter_id: "u1".to_string(),
            reporter_name: "Somchai Student".to_string(),
            created_at: now - Duration::hours(3),
            image_url: Some(
                "https://images.unsplash.com/photo-1591026046467-a2f029311394?q=80&w=800"
                    .to_string(),
            ),
            logs: vec![log(
                IssueStatus::Pending,
                now - Duration::hours(3),
                "Issue reported",
            )],
        },
    ]
}
