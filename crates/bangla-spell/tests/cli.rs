//! End-to-end CLI integration tests
//!
//! These tests invoke the compiled binary as a subprocess to verify
//! that the CLI behaves correctly from a user's perspective.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Returns a Command configured to run our binary.
///
/// Note: `cargo_bin` is marked deprecated for edge cases involving custom
/// cargo build directories, but works correctly for standard project layouts.
#[allow(deprecated)]
fn cmd() -> Command {
    Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap()
}

/// A project directory whose config points at a single word list.
fn project_with_words(words: &str) -> TempDir {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("words.txt"), words).unwrap();
    fs::write(
        tmp.path().join(".bangla-spell.toml"),
        "dictionary_dir = \".\"\ndictionary_files = [\"words.txt\"]\n",
    )
    .unwrap();
    tmp
}

/// Runs the binary as if started in `dir`.
fn cmd_in(dir: &TempDir) -> Command {
    let mut c = cmd();
    c.arg("-C").arg(dir.path());
    c
}

// =============================================================================
// Help & Version
// =============================================================================

#[test]
fn help_flag_shows_usage() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("Commands:"))
        .stdout(predicate::str::contains("Options:"));
}

#[test]
fn no_arguments_shows_help_and_fails() {
    cmd()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn version_flag_shows_version() {
    cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn version_only_prints_bare_version() {
    cmd()
        .arg("--version-only")
        .assert()
        .success()
        .stdout(predicate::str::diff(format!(
            "{}\n",
            env!("CARGO_PKG_VERSION")
        )));
}

// =============================================================================
// Info Command
// =============================================================================

#[test]
fn info_shows_package_name_and_version() {
    cmd()
        .arg("info")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_NAME")))
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn info_json_outputs_valid_json() {
    let output = cmd().arg("info").arg("--json").assert().success();

    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    let json: serde_json::Value =
        serde_json::from_str(&stdout).expect("info --json should output valid JSON");

    assert_eq!(json["name"], env!("CARGO_PKG_NAME"));
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    assert!(json["config"]["dictionary_files"].is_array());
}

// =============================================================================
// Global Flags
// =============================================================================

#[test]
fn quiet_flag_accepted() {
    cmd().args(["--quiet", "info"]).assert().success();
}

#[test]
fn multiple_verbose_flags_accepted() {
    cmd().args(["-vv", "info"]).assert().success();
}

#[test]
fn color_never_accepted() {
    cmd().args(["--color", "never", "info"]).assert().success();
}

// =============================================================================
// Check Command
// =============================================================================

#[test]
fn check_known_text_passes() {
    let project = project_with_words("আমি\nভালো\nআছি\n");
    cmd_in(&project)
        .args(["--color", "never", "check", "--text", "আমি ভালো আছি।"])
        .assert()
        .success()
        .stdout(predicate::str::contains("PASS"));
}

#[test]
fn check_unknown_words_fails_and_lists_them() {
    let project = project_with_words("আমি\nভালো\n");
    cmd_in(&project)
        .args(["--color", "never", "check", "--text", "আমি ভাল আছি!"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("ভাল"))
        .stdout(predicate::str::contains("আছি"))
        .stderr(predicate::str::contains("misspelled"));
}

#[test]
fn check_json_reports_errors_field() {
    let project = project_with_words("আমি\nভালো\n");
    let output = cmd_in(&project)
        .args(["check", "--json", "--text", "আমি ভাল আছি! ভাল"])
        .assert()
        .success();

    let json: serde_json::Value = serde_json::from_slice(&output.get_output().stdout).unwrap();
    assert_eq!(json, serde_json::json!({"errors": ["ভাল", "আছি"]}));
}

#[test]
fn check_reads_stdin() {
    let project = project_with_words("কথা\n");
    cmd_in(&project)
        .args(["check", "--json"])
        .write_stdin("কথা বলা\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("বলা"))
        .stdout(predicate::str::contains("\"কথা\"").not());
}

#[test]
fn check_reads_file() {
    let project = project_with_words("আমি\n");
    fs::write(project.path().join("input.txt"), "আমি (আমি), আমি.\n").unwrap();
    cmd_in(&project)
        .args(["check", "input.txt"])
        .assert()
        .success();
}

#[test]
fn check_file_and_text_conflict() {
    cmd()
        .args(["check", "input.txt", "--text", "আমি"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn check_with_no_word_lists_reports_everything() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join("bangla-spell.toml"),
        "dictionary_dir = \".\"\ndictionary_files = [\"absent.txt\"]\n",
    )
    .unwrap();
    let output = cmd_in(&tmp)
        .args(["check", "--json", "--text", "কথা বলা"])
        .assert()
        .success();

    let json: serde_json::Value = serde_json::from_slice(&output.get_output().stdout).unwrap();
    assert_eq!(json["errors"], serde_json::json!(["কথা", "বলা"]));
}

#[test]
fn check_rejects_oversized_file() {
    let project = project_with_words("আমি\n");
    fs::write(
        project.path().join(".bangla-spell.toml"),
        "dictionary_dir = \".\"\ndictionary_files = [\"words.txt\"]\nmax_input_bytes = 8\n",
    )
    .unwrap();
    fs::write(project.path().join("big.txt"), "আমি আমি আমি আমি").unwrap();
    cmd_in(&project)
        .args(["check", "big.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("input too large"));
}

// =============================================================================
// Sources Command
// =============================================================================

#[test]
fn sources_reports_each_outcome() {
    let project = project_with_words("আমি\nভালো\nআমি\n");
    fs::write(
        project.path().join(".bangla-spell.toml"),
        "dictionary_dir = \".\"\ndictionary_files = [\"words.txt\", \"absent.txt\"]\n",
    )
    .unwrap();
    let output = cmd_in(&project)
        .args(["sources", "--json"])
        .assert()
        .success();

    let json: serde_json::Value = serde_json::from_slice(&output.get_output().stdout).unwrap();
    assert_eq!(json["total_words"], 2);
    assert_eq!(json["sources"][0]["status"], "loaded");
    assert_eq!(json["sources"][0]["entries"], 3);
    assert_eq!(json["sources"][1]["status"], "missing");
}

#[test]
fn sources_text_output() {
    let project = project_with_words("আমি\n");
    cmd_in(&project)
        .args(["--color", "never", "sources"])
        .assert()
        .success()
        .stdout(predicate::str::contains("LOADED"))
        .stdout(predicate::str::contains("words.txt (1 entries)"))
        .stdout(predicate::str::contains("Total unique words"));
}

// =============================================================================
// Serve Command
// =============================================================================

#[test]
fn serve_help_shows_options() {
    cmd()
        .args(["serve", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--port"))
        .stdout(predicate::str::contains("--lazy"));
}
