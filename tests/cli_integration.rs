//! Integration tests for the gitbind binary.
//!
//! These tests exercise the full CLI: definition rendering needs no
//! repository, the record commands run against real temporary repos.

use std::path::Path;
use std::process::Command as StdCommand;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Get a command for running gitbind.
fn gitbind() -> Command {
    let mut cmd = Command::cargo_bin("gitbind").unwrap();
    cmd.env_remove("GITBIND_LOG");
    cmd
}

fn run_git(dir: &Path, args: &[&str]) {
    let status = StdCommand::new("git")
        .args(args)
        .current_dir(dir)
        .status()
        .expect("git command failed");
    assert!(status.success(), "git {:?} failed", args);
}

/// A repository on `main` with one commit.
fn temp_repo() -> TempDir {
    let dir = TempDir::new().unwrap();
    run_git(dir.path(), &["init", "-q"]);
    run_git(dir.path(), &["symbolic-ref", "HEAD", "refs/heads/main"]);
    run_git(dir.path(), &["config", "user.email", "test@example.com"]);
    run_git(dir.path(), &["config", "user.name", "Test User"]);
    run_git(dir.path(), &["config", "commit.gpgsign", "false"]);
    std::fs::write(dir.path().join("README.md"), "# Test\n").unwrap();
    run_git(dir.path(), &["add", "README.md"]);
    run_git(dir.path(), &["commit", "-q", "-m", "Initial commit"]);
    dir
}

// =============================================================================
// Global flags
// =============================================================================

#[test]
fn version_flag_works() {
    gitbind()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("gitbind"));
}

#[test]
fn help_lists_subcommands() {
    gitbind()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("render"))
        .stdout(predicate::str::contains("completion"));
}

// =============================================================================
// Definitions
// =============================================================================

#[test]
fn commands_lists_registry() {
    gitbind()
        .arg("commands")
        .assert()
        .success()
        .stdout(predicate::str::contains("branch.copy"))
        .stdout(predicate::str::contains("stash.list"));
}

#[test]
fn render_single_operand_copy() {
    gitbind()
        .args(["render", "branch.copy", "new-name"])
        .assert()
        .success()
        .stdout("git branch --copy new-name\n");
}

#[test]
fn render_flags_and_values() {
    gitbind()
        .args([
            "render",
            "commit",
            "--set",
            "message=two words",
            "--no",
            "verify",
        ])
        .assert()
        .success()
        .stdout("git commit --no-verify --message \"two words\"\n");
}

#[test]
fn render_repeated_set_builds_list() {
    gitbind()
        .args([
            "render",
            "branch.list",
            "--set",
            "sort=refname",
            "--set",
            "sort=-date",
        ])
        .assert()
        .success()
        .stdout("git branch --list --sort=refname --sort=-date\n");
}

#[test]
fn render_json_separates_execution_values() {
    let output = gitbind()
        .args([
            "render",
            "clone",
            "https://example.com/r.git",
            "--set",
            "timeout=30",
            "--json",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        value["tokens"],
        serde_json::json!(["clone", "https://example.com/r.git"])
    );
    assert_eq!(value["execution"]["timeout"], "30");
}

#[test]
fn render_reports_binding_errors() {
    gitbind()
        .args(["render", "branch.copy"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::starts_with("error:"))
        .stderr(predicate::str::contains("new_branch"));
}

#[test]
fn render_reports_conflicts() {
    gitbind()
        .args(["render", "fetch", "origin", "--flag", "all"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("conflicting arguments"));
}

#[test]
fn render_unknown_definition() {
    gitbind()
        .args(["render", "frobnicate"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown definition 'frobnicate'"));
}

#[test]
fn completion_bash() {
    gitbind()
        .args(["completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("gitbind"));
}

// =============================================================================
// Repository views
// =============================================================================

#[test]
fn branches_in_repo() {
    let repo = temp_repo();
    run_git(repo.path(), &["branch", "feature"]);

    gitbind()
        .arg("--cwd")
        .arg(repo.path())
        .arg("branches")
        .assert()
        .success()
        .stdout("  feature\n* main\n");
}

#[test]
fn tags_print_json_array() {
    let repo = temp_repo();
    run_git(repo.path(), &["tag", "v0.1.0"]);

    let output = gitbind()
        .current_dir(repo.path())
        .arg("tags")
        .output()
        .unwrap();
    assert!(output.status.success());
    let tags: Vec<String> = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(tags, ["v0.1.0"]);
}

#[test]
fn status_json_in_clean_repo() {
    let repo = temp_repo();

    let output = gitbind()
        .current_dir(repo.path())
        .args(["status", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["branch"]["head"], "main");
    assert_eq!(value["entries"], serde_json::json!([]));
}

#[test]
fn log_limits_commits() {
    let repo = temp_repo();

    gitbind()
        .current_dir(repo.path())
        .args(["log", "-n", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Initial commit"));
}

#[test]
fn repository_commands_fail_outside_repo() {
    let dir = TempDir::new().unwrap();
    gitbind()
        .arg("--cwd")
        .arg(dir.path())
        .arg("status")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to open repository"));
}
