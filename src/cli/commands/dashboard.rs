use anyhow::Result;
use chrono::Utc;
use fixit_lib::{Issue, analytics};

use super::open_engines;
use crate::config::Config;
use crate::format::{self, DashboardView};

/// Execute the dashboard command.
///
/// # Errors
///
/// Returns an error if the store directory cannot be opened.
pub fn execute(config: &Config, json: bool) -> Result<()> {
    let (session, store) = open_engines(config)?;
    let now = Utc::now();
    let view = DashboardView::compute(store.issues(), now);

    if json {
        println!("{}", serde_json::to_string_pretty(&view)?);
        return Ok(());
    }

    let officer = session
        .current_user()
        .map_or("Officer", |user| user.full_name.as_str());
    println!("Maintenance Operation Center - hello, {officer}");
    println!(
        "  active: {}   done: {}",
        view.total_active, view.total_done
    );

    println!("\nCritical tasks:");
    print_issue_section(&view.critical, now);

    println!("\nMy tasks (in progress):");
    print_issue_section(&view.my_tasks, now);

    println!("\nOver SLA (>{}h):", analytics::SLA_HOURS);
    print_issue_section(&view.over_sla, now);

    println!("\nTasks by building:");
    if view.buildings.is_empty() {
        println!("  (none)");
    }
    for load in &view.buildings {
        println!("  {:<24} {}", load.building, load.count);
    }
    Ok(())
}

fn print_issue_section(issues: &[Issue], now: chrono::DateTime<Utc>) {
    if issues.is_empty() {
        println!("  (none)");
        return;
    }
    for issue in issues {
        println!(
            "  {}  waiting {}",
            format::format_issue_line(issue),
            format::format_elapsed(analytics::elapsed(issue.created_at, now))
        );
    }
}
