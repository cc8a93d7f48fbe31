//! Binary smoke tests for the paths that never touch the network.

use assert_cmd::Command;
use predicates::prelude::*;

fn sensei() -> Command {
    let mut cmd = Command::cargo_bin("code-sensei").unwrap();
    // Run from an empty directory so no stray .env can configure the tool.
    cmd.current_dir(tempfile::tempdir().unwrap().into_path());
    cmd.env_remove("GEMINI_API_KEY");
    cmd
}

#[test]
fn demo_without_credential_reports_not_configured() {
    sensei()
        .arg("demo")
        .assert()
        .success()
        .stderr(predicate::str::contains("not configured"));
}

#[test]
fn analyze_missing_file_reports_error() {
    sensei()
        .args(["analyze", "does_not_exist.py"])
        .assert()
        .success()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn interactive_without_credential_reports_not_configured() {
    sensei()
        .arg("interactive")
        .write_stdin("")
        .assert()
        .success()
        .stderr(predicate::str::contains("not configured"));
}
