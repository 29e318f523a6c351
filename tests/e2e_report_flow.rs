mod common;
use common::cli::{FxWorkspace, run_fx};

#[test]
fn test_report_update_delete_flow() {
    let workspace = FxWorkspace::new();

    let report = run_fx(
        &workspace,
        [
            "report",
            "--title",
            "Hallway light flickering",
            "--description",
            "Second floor hallway, near the stairs",
            "--location",
            "Building 7, Floor 2",
            "--category",
            "electricity",
            "--json",
        ],
        "report",
    );
    assert!(report.success, "report failed: {}", report.stderr);

    let issue: serde_json::Value =
        serde_json::from_str(&report.stdout).expect("report --json emits one issue");
    let id = issue["id"].as_str().unwrap().to_string();
    let code = issue["trackingCode"].as_str().unwrap().to_string();
    assert!(code.starts_with("PSU-"), "got code {code}");
    assert_eq!(issue["status"], "PENDING");
    assert_eq!(issue["logs"].as_array().unwrap().len(), 1);

    // Newest first: the fresh report leads the list, ahead of the seeds.
    let list = run_fx(&workspace, ["list"], "list");
    assert!(list.success, "list failed: {}", list.stderr);
    let first_line = list.stdout.lines().next().unwrap();
    assert!(
        first_line.contains("Hallway light flickering"),
        "got: {first_line}"
    );

    let update = run_fx(&workspace, ["status", id.as_str(), "in_progress"], "status");
    assert!(update.success, "status failed: {}", update.stderr);
    assert!(update.stdout.contains("IN_PROGRESS"));

    let show = run_fx(&workspace, ["show", id.as_str()], "show");
    assert!(show.success, "show failed: {}", show.stderr);
    assert!(show.stdout.contains("Technician assigned"));

    let delete = run_fx(&workspace, ["delete", id.as_str()], "delete");
    assert!(delete.success, "delete failed: {}", delete.stderr);

    let track = run_fx(&workspace, ["track", code.as_str()], "track_deleted");
    assert!(!track.success, "deleted issue must not be trackable");

    let list = run_fx(&workspace, ["list"], "list_after_delete");
    assert!(!list.stdout.contains("Hallway light flickering"));
}

#[test]
fn test_report_rejects_blank_title() {
    let workspace = FxWorkspace::new();

    let report = run_fx(
        &workspace,
        [
            "report",
            "--title",
            "   ",
            "--description",
            "something",
            "--location",
            "somewhere",
        ],
        "blank_title",
    );
    assert!(!report.success);
    assert!(report.stderr.contains("title"), "got: {}", report.stderr);
}

#[test]
fn test_reopen_is_recorded_in_history() {
    let workspace = FxWorkspace::new();

    let report = run_fx(
        &workspace,
        [
            "report",
            "--title",
            "Door handle loose",
            "--description",
            "Main entrance",
            "--location",
            "Building 2",
            "--json",
        ],
        "report",
    );
    let issue: serde_json::Value = serde_json::from_str(&report.stdout).unwrap();
    let id = issue["id"].as_str().unwrap().to_string();

    run_fx(&workspace, ["status", id.as_str(), "done"], "close");
    let reopen = run_fx(&workspace, ["status", id.as_str(), "pending", "--json"], "reopen");
    assert!(reopen.success, "reopen failed: {}", reopen.stderr);

    let reopened: serde_json::Value = serde_json::from_str(&reopen.stdout).unwrap();
    assert_eq!(reopened["status"], "PENDING");
    let logs = reopened["logs"].as_array().unwrap();
    assert_eq!(logs.len(), 3, "one log entry per transition");
    assert_eq!(logs[2]["note"], "Reopened for review");
}
