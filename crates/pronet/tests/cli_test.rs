//! Integration tests for the `pronet` CLI binary.
//!
//! These tests validate argument parsing, help output, shell completions,
//! the offline mock-backed commands, and flag persistence across runs.
#![allow(clippy::unwrap_used)]

use std::path::{Path, PathBuf};

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::TempDir;

// ── Helpers ─────────────────────────────────────────────────────────

/// Build a [`Command`] for the `pronet` binary with env isolation.
///
/// Points home and XDG directories at `home`, clears all `PRONET_*`
/// overrides, and removes mock latency so tests run instantly.
fn pronet_cmd(home: &Path) -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("pronet");
    cmd.env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join("config"))
        .env("XDG_DATA_HOME", home.join("data"))
        .env_remove("PRONET_OUTPUT")
        .env_remove("PRONET_STATE_FILE")
        .env_remove("PRONET_DEFAULTS__OUTPUT")
        .env_remove("PRONET_DISCOVERY__CIRCULAR")
        .env_remove("PRONET_DISCOVERY__DAILY_FREE_LIMIT")
        .env_remove("RUST_LOG")
        .env("PRONET_MOCK__LATENCY_MS", "0")
        .env("NO_COLOR", "1");
    cmd
}

/// Isolated home plus a state file inside it.
fn sandbox() -> (TempDir, PathBuf) {
    let home = tempfile::tempdir().unwrap();
    let state = home.path().join("state.toml");
    (home, state)
}

/// Run with `--state-file` and return trimmed stdout.
fn run_stateful(home: &Path, state: &Path, args: &[&str]) -> String {
    let output = pronet_cmd(home)
        .arg("--state-file")
        .arg(state)
        .args(args)
        .output()
        .unwrap();
    assert!(
        output.status.success(),
        "pronet {args:?} failed:\n{}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).trim().to_owned()
}

fn json(home: &Path, args: &[&str]) -> serde_json::Value {
    let output = pronet_cmd(home)
        .args(["--ephemeral", "-o", "json"])
        .args(args)
        .output()
        .unwrap();
    assert!(
        output.status.success(),
        "pronet {args:?} failed:\n{}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).unwrap()
}

// ── Basic invocation ────────────────────────────────────────────────

#[test]
fn test_no_args_shows_help() {
    let home = tempfile::tempdir().unwrap();
    let output = pronet_cmd(home.path()).output().unwrap();
    assert_eq!(output.status.code(), Some(2), "Expected exit code 2");
    let text = format!(
        "{}{}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(text.contains("Usage"), "Expected 'Usage' in output:\n{text}");
}

#[test]
fn test_help_flag() {
    let home = tempfile::tempdir().unwrap();
    pronet_cmd(home.path()).arg("--help").assert().success().stdout(
        predicate::str::contains("discover")
            .and(predicate::str::contains("onboarding"))
            .and(predicate::str::contains("auth"))
            .and(predicate::str::contains("session")),
    );
}

#[test]
fn test_version_flag() {
    let home = tempfile::tempdir().unwrap();
    pronet_cmd(home.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("pronet"));
}

#[test]
fn test_completions_zsh() {
    let home = tempfile::tempdir().unwrap();
    pronet_cmd(home.path())
        .args(["completions", "zsh"])
        .assert()
        .success()
        .stdout(predicate::str::contains("#compdef"));
}

#[test]
fn test_state_file_conflicts_with_ephemeral() {
    let (home, state) = sandbox();
    pronet_cmd(home.path())
        .arg("--ephemeral")
        .arg("--state-file")
        .arg(&state)
        .arg("flow")
        .assert()
        .code(2);
}

// ── Flow and onboarding ─────────────────────────────────────────────

#[test]
fn test_fresh_install_starts_in_onboarding() {
    let home = tempfile::tempdir().unwrap();
    pronet_cmd(home.path())
        .args(["--ephemeral", "-o", "plain", "flow"])
        .assert()
        .success()
        .stdout("onboarding\n");
}

#[test]
fn test_onboarding_slides() {
    let home = tempfile::tempdir().unwrap();
    let output = pronet_cmd(home.path())
        .args(["-o", "plain", "onboarding", "slides"])
        .output()
        .unwrap();
    let text = String::from_utf8_lossy(&output.stdout);
    insta::assert_snapshot!(text.trim_end(), @r"
    Grow Your Career
    Smart Matching
    Private Messaging
    ");
}

#[test]
fn test_onboarding_failure_is_reported() {
    let (home, state) = sandbox();
    pronet_cmd(home.path())
        .arg("--state-file")
        .arg(&state)
        .args(["onboarding", "complete", "--simulate-failure"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("onboarding"));
    assert_eq!(run_stateful(home.path(), &state, &["-o", "plain", "flow"]), "onboarding");
}

#[test]
fn test_sign_in_journey_persists() {
    let (home, state) = sandbox();

    run_stateful(home.path(), &state, &["onboarding", "complete"]);
    assert_eq!(run_stateful(home.path(), &state, &["-o", "plain", "flow"]), "auth");
    let saved = std::fs::read_to_string(&state).unwrap();
    assert!(saved.contains("hasCompletedOnboarding = true"), "{saved}");

    let screen = run_stateful(home.path(), &state, &["auth", "send-code", "5551234567"]);
    assert_eq!(screen, "Verify +15551234567");

    run_stateful(home.path(), &state, &["auth", "verify", "123-456"]);
    assert_eq!(run_stateful(home.path(), &state, &["-o", "plain", "flow"]), "main");

    run_stateful(home.path(), &state, &["-y", "auth", "logout"]);
    assert_eq!(run_stateful(home.path(), &state, &["-o", "plain", "flow"]), "auth");
}

#[test]
fn test_auth_before_onboarding_is_wrong_flow() {
    let home = tempfile::tempdir().unwrap();
    pronet_cmd(home.path())
        .args(["--ephemeral", "auth", "verify", "123456"])
        .assert()
        .code(5)
        .stderr(predicate::str::contains("onboarding complete"));
}

#[test]
fn test_short_code_is_rejected() {
    let (home, state) = sandbox();
    run_stateful(home.path(), &state, &["onboarding", "complete"]);
    pronet_cmd(home.path())
        .arg("--state-file")
        .arg(&state)
        .args(["auth", "verify", "12"])
        .assert()
        .code(2);
}

#[test]
fn test_invalid_phone_is_rejected() {
    let (home, state) = sandbox();
    run_stateful(home.path(), &state, &["onboarding", "complete"]);
    pronet_cmd(home.path())
        .arg("--state-file")
        .arg(&state)
        .args(["auth", "send-code", "--country", "gb", "123"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("United Kingdom"));
}

#[test]
fn test_corrupt_state_file() {
    let (home, state) = sandbox();
    std::fs::write(&state, "isAuthenticated = [").unwrap();
    pronet_cmd(home.path())
        .arg("--state-file")
        .arg(&state)
        .arg("flow")
        .assert()
        .code(6)
        .stderr(predicate::str::contains("--ephemeral"));
}

// ── Discovery ───────────────────────────────────────────────────────

#[test]
fn test_discover_deck_plain_lists_three_cards() {
    let home = tempfile::tempdir().unwrap();
    let output = pronet_cmd(home.path())
        .args(["--ephemeral", "-o", "plain", "discover", "deck"])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).lines().count(), 3);
}

#[test]
fn test_swipe_quota_blocks_after_limit() {
    let home = tempfile::tempdir().unwrap();
    let reports = json(
        home.path(),
        &["discover", "swipe", "like", "pass", "like", "--limit", "2"],
    );
    let outcomes: Vec<&str> = reports
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["outcome"].as_str().unwrap())
        .collect();
    assert_eq!(outcomes, ["recycled", "recycled", "blocked"]);
    assert_eq!(reports[0]["card"], "Herman West");
    assert_eq!(reports[2]["status"], "limit-reached");
    assert_eq!(reports[2]["swipes_today"], 2);
}

#[test]
fn test_linear_deck_is_exhausted() {
    let home = tempfile::tempdir().unwrap();
    let reports = json(
        home.path(),
        &["discover", "swipe", "pass", "pass", "pass", "like", "--linear"],
    );
    assert_eq!(reports[2]["outcome"], "removed");
    assert_eq!(reports[3]["outcome"], "empty");
    assert_eq!(reports[3]["status"], "exhausted");
    assert_eq!(reports[3]["remaining_today"], serde_json::Value::Null);
}

#[test]
fn test_invalid_swipe_action() {
    let home = tempfile::tempdir().unwrap();
    pronet_cmd(home.path())
        .args(["--ephemeral", "discover", "swipe", "superlike"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("possible values"));
}

// ── Chats, notifications, profile ───────────────────────────────────

#[test]
fn test_chats_search() {
    let home = tempfile::tempdir().unwrap();
    pronet_cmd(home.path())
        .args(["--ephemeral", "-o", "plain", "chats", "list", "--search", "PRIYA"])
        .assert()
        .success()
        .stdout("Priya Mehta\n");
}

#[test]
fn test_chat_thread_send() {
    let home = tempfile::tempdir().unwrap();
    let messages = json(home.path(), &["chats", "thread", "ava", "--send", "  Hello there  "]);
    let messages = messages.as_array().unwrap();
    assert_eq!(messages.len(), 4);
    let last = &messages[3];
    assert_eq!(last["text"], "Hello there");
    assert_eq!(last["time"], "Now");
    assert_eq!(last["is_me"], true);
}

#[test]
fn test_chat_thread_unknown_partner() {
    let home = tempfile::tempdir().unwrap();
    pronet_cmd(home.path())
        .args(["--ephemeral", "chats", "thread", "nobody"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("chats list"));
}

#[test]
fn test_notifications_filter() {
    let home = tempfile::tempdir().unwrap();
    let items = json(home.path(), &["notifications", "--filter", "matches"]);
    let items = items.as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["kind"], "match");
}

#[test]
fn test_profile_view_by_id() {
    let home = tempfile::tempdir().unwrap();
    let profile = json(home.path(), &["profile", "view", "liam-nguyen"]);
    assert_eq!(profile["full_name"], "Liam Nguyen");
    assert_eq!(profile["friends"].as_array().unwrap().len(), 3);
}

// ── Config ──────────────────────────────────────────────────────────

#[test]
fn test_config_show_defaults() {
    let home = tempfile::tempdir().unwrap();
    let cfg = json(home.path(), &["config", "show"]);
    assert_eq!(cfg["defaults"]["output"], "table");
    assert_eq!(cfg["discovery"]["circular"], true);
}

#[test]
fn test_config_init_with_yes_writes_defaults() {
    let home = tempfile::tempdir().unwrap();
    pronet_cmd(home.path())
        .args(["-y", "config", "init"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Configuration written"));

    let paths = json(home.path(), &["config", "path"]);
    let written = std::fs::read_to_string(paths["config"].as_str().unwrap()).unwrap();
    assert!(written.contains("[discovery]"), "{written}");
}

#[test]
fn test_config_limit_applies_to_deck() {
    let home = tempfile::tempdir().unwrap();
    let output = pronet_cmd(home.path())
        .env("PRONET_DISCOVERY__DAILY_FREE_LIMIT", "1")
        .args(["--ephemeral", "-o", "json", "discover", "swipe", "like", "like"])
        .output()
        .unwrap();
    let reports: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(reports[1]["outcome"], "blocked");
}

#[test]
fn test_session_requires_terminal() {
    let home = tempfile::tempdir().unwrap();
    pronet_cmd(home.path())
        .args(["--ephemeral", "session"])
        .write_stdin("")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("interactive terminal"));
}
