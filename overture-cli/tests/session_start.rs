//! End-to-end hook behavior through the `overture` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Hook invocation with an isolated home and no inherited plugin/env state.
fn hook_command(home: &TempDir, project: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("overture").expect("overture binary");
    cmd.current_dir(project.path())
        .env("HOME", home.path())
        .env("USERPROFILE", home.path())
        .env_remove("CLAUDE_PLUGIN_ROOT")
        .env_remove("npm_config_user_agent")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn exits_zero_and_creates_directories_without_plugin_root() {
    let home = TempDir::new().expect("home");
    let project = TempDir::new().expect("project");

    hook_command(&home, &project)
        .assert()
        .success()
        .stdout(predicate::str::contains("CLAUDE_PLUGIN_ROOT not set"));

    assert!(
        home.path().join(".claude").join("sessions").is_dir(),
        "sessions directory must be created on first run"
    );
    assert!(
        home.path().join(".claude").join("skills").join("learned").is_dir(),
        "learned directory must be created on first run"
    );
}

#[test]
fn first_run_reports_no_artifacts() {
    let home = TempDir::new().expect("home");
    let project = TempDir::new().expect("project");

    hook_command(&home, &project)
        .assert()
        .success()
        .stdout(predicate::str::contains("recent session").not())
        .stdout(predicate::str::contains("learned procedure").not());
}

#[test]
fn surfaces_recent_sessions_and_learned_procedures() {
    let home = TempDir::new().expect("home");
    let project = TempDir::new().expect("project");

    let sessions = home.path().join(".claude").join("sessions");
    let learned = home.path().join(".claude").join("skills").join("learned");
    std::fs::create_dir_all(&sessions).expect("mkdir sessions");
    std::fs::create_dir_all(&learned).expect("mkdir learned");
    std::fs::write(sessions.join("a.tmp"), "ctx").expect("write");
    std::fs::write(sessions.join("b.tmp"), "ctx").expect("write");
    std::fs::write(sessions.join("ignored.log"), "noise").expect("write");
    std::fs::write(learned.join("retry-loop.md"), "note").expect("write");

    hook_command(&home, &project)
        .assert()
        .success()
        .stdout(predicate::str::contains("found 2 recent session(s)"))
        .stdout(predicate::str::contains("latest:"))
        .stdout(predicate::str::contains("1 learned procedure(s) available"));
}

#[test]
fn reports_lockfile_inferred_package_manager_without_prompting() {
    let home = TempDir::new().expect("home");
    let project = TempDir::new().expect("project");
    std::fs::write(project.path().join("yarn.lock"), "").expect("write lockfile");

    hook_command(&home, &project)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "package manager: yarn (lockfile-inference)",
        ))
        .stdout(predicate::str::contains("pin one").not());
}

#[test]
fn guessed_package_manager_shows_the_selection_prompt() {
    let home = TempDir::new().expect("home");
    let project = TempDir::new().expect("project");

    // No package.json, no lockfile, no user agent: detection lands on the
    // PATH fallback or the default, both of which are guesses.
    hook_command(&home, &project)
        .assert()
        .success()
        .stdout(predicate::str::contains("no package manager preference found"));
}

#[test]
fn untracked_plugin_root_stays_silent_in_text_mode() {
    let home = TempDir::new().expect("home");
    let project = TempDir::new().expect("project");
    let plugin = TempDir::new().expect("plugin root");

    hook_command(&home, &project)
        .env("CLAUDE_PLUGIN_ROOT", plugin.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("not a tracked repository").not());
}

#[test]
fn json_mode_emits_one_machine_readable_summary() {
    let home = TempDir::new().expect("home");
    let project = TempDir::new().expect("project");
    std::fs::write(project.path().join("pnpm-lock.yaml"), "").expect("write lockfile");

    let assert = hook_command(&home, &project).arg("--json").assert().success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).expect("utf8");

    let summary: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON summary");
    assert_eq!(summary["sync"]["status"], "error");
    assert_eq!(summary["sync"]["message"], "CLAUDE_PLUGIN_ROOT not set");
    assert!(summary["sessions"].as_array().expect("array").is_empty());
    assert!(summary["learned"].as_array().expect("array").is_empty());
    assert_eq!(summary["package_manager"]["manager"], "pnpm");
    assert_eq!(summary["package_manager"]["source"], "lockfile-inference");
}
