mod common;
use common::cli::{FxWorkspace, run_fx};
use predicates::str::contains;

#[test]
fn test_version_prints_crate_version() {
    let workspace = FxWorkspace::new();

    assert_cmd::Command::cargo_bin("fx")
        .unwrap()
        .env("FIXIT_DATA_DIR", workspace.data_dir())
        .arg("version")
        .assert()
        .success()
        .stdout(contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_no_subcommand_points_at_help() {
    let workspace = FxWorkspace::new();

    let bare = run_fx(&workspace, std::iter::empty::<&str>(), "bare");
    assert!(bare.success);
    assert!(bare.stdout.contains("--help"));
}

#[test]
fn test_invalid_status_value_is_rejected() {
    let workspace = FxWorkspace::new();

    let bad = run_fx(&workspace, ["status", "1", "closed"], "bad_status");
    assert!(!bad.success);
    assert!(bad.stderr.contains("Invalid status"), "got: {}", bad.stderr);
}
