// lakeops: Lakehouse ingestion tooling
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::scripted::ScriptedRunner;
use super::{CommandRunner, Invocation, SystemRunner};

#[test]
fn test_invocation_command_line() {
    let inv = Invocation::new("git")
        .args(["diff", "--cached"])
        .arg("--name-only")
        .cwd("/repo")
        .env("GIT_TERMINAL_PROMPT", "0");
    assert_eq!(inv.command_line(), "git diff --cached --name-only");
    assert_eq!(inv.working_dir().map(|p| p.display().to_string()).as_deref(), Some("/repo"));
    assert_eq!(inv.environment().get("GIT_TERMINAL_PROMPT").map(String::as_str), Some("0"));
}

#[tokio::test]
async fn test_system_runner_reports_exit_code_without_failing() {
    let inv = Invocation::new("sh").args(["-c", "echo partial; exit 7"]);
    let output = SystemRunner.run(&inv).await.expect("sh should spawn");
    assert_eq!(output.exit_code(), 7);
    assert_eq!(output.stdout(), "partial\n");
}

#[tokio::test]
async fn test_system_runner_passes_env_and_cwd() {
    let temp = tempfile::tempdir().expect("failed to create temp dir");
    std::fs::write(temp.path().join("marker.txt"), "").unwrap();

    let inv = Invocation::new("sh")
        .args(["-c", "ls; echo \"$LAKEOPS_MARK\""])
        .cwd(temp.path())
        .env("LAKEOPS_MARK", "set");
    let output = SystemRunner.run(&inv).await.expect("sh should spawn");
    assert!(output.success());
    assert_eq!(output.stdout(), "marker.txt\nset\n");
}

#[tokio::test]
async fn test_system_runner_missing_program_is_error() {
    let inv = Invocation::new("nonexistent_program_12345");
    assert!(SystemRunner.run(&inv).await.is_err());
    assert!(SystemRunner.locate("nonexistent_program_12345").is_none());
}

#[tokio::test]
async fn test_scripted_runner_first_matching_rule_wins() {
    let runner = ScriptedRunner::new()
        .stdout("git rev-parse main", "aaa\n")
        .stdout("git rev-parse", "bbb\n")
        .missing("black");

    let main = runner
        .run(&Invocation::new("git").args(["rev-parse", "main"]))
        .await
        .unwrap();
    let other = runner
        .run(&Invocation::new("git").args(["rev-parse", "HEAD"]))
        .await
        .unwrap();
    let unmatched = runner.run(&Invocation::new("true")).await.unwrap();

    assert_eq!(main.stdout(), "aaa\n");
    assert_eq!(other.stdout(), "bbb\n");
    assert!(unmatched.success());
    assert!(runner.locate("black").is_none());
    assert!(runner.locate("sqlfluff").is_some());
    assert_eq!(runner.count("git rev-parse"), 2);
}
