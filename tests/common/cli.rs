//! Shared helpers for end-to-end CLI tests.

use std::ffi::OsStr;

use assert_cmd::Command;

/// A throwaway data directory for one test's `fx` invocations.
pub struct FxWorkspace {
    dir: tempfile::TempDir,
}

impl FxWorkspace {
    #[must_use]
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("create temp workspace"),
        }
    }

    #[must_use]
    pub fn data_dir(&self) -> &std::path::Path {
        self.dir.path()
    }
}

impl Default for FxWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

/// Captured output of one `fx` run.
pub struct FxOutput {
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

/// Run `fx` against the workspace's data directory.
pub fn run_fx<I, S>(workspace: &FxWorkspace, args: I, label: &str) -> FxOutput
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let output = Command::cargo_bin("fx")
        .expect("fx binary")
        .env("FIXIT_DATA_DIR", workspace.data_dir())
        .args(args)
        .output()
        .unwrap_or_else(|e| panic!("{label}: failed to run fx: {e}"));

    FxOutput {
        success: output.status.success(),
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    }
}
