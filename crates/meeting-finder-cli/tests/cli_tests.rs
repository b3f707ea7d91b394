//! Integration tests for the `meetq` CLI binary.
//!
//! These tests use `assert_cmd` and `predicates` to exercise the find and
//! validate subcommands through the actual binary, including stdin/stdout
//! piping, file I/O, output formats, and error handling.

// `Command::cargo_bin` was deprecated in assert_cmd 2.1.2 in favor of
// `cargo::cargo_bin_cmd!`. Allow it until we migrate.
#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;

fn fixture(name: &str) -> String {
    format!("{}/tests/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name)
}

fn meetq() -> Command {
    Command::cargo_bin("meetq").unwrap()
}

fn find_json(args: &[&str]) -> serde_json::Value {
    let output = meetq().arg("find").args(args).output().expect("find should run");
    assert!(output.status.success(), "find failed: {:?}", output);
    serde_json::from_slice(&output.stdout).expect("stdout should be JSON")
}

// ─────────────────────────────────────────────────────────────────────────────
// find
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn find_from_file_prints_json_slots() {
    let slots = find_json(&["-i", &fixture("day.json")]);

    let slots = slots.as_array().expect("array of slots");
    assert_eq!(slots.len(), 3);
    assert_eq!(slots[0]["start"], 0);
    assert_eq!(slots[0]["end"], 480);
    assert_eq!(slots[1]["start"], 510);
    assert_eq!(slots[1]["end"], 540);
    assert_eq!(slots[2]["start"], 570);
    assert_eq!(slots[2]["end"], 1440);
    assert_eq!(slots[2]["duration"], 870);
}

#[test]
fn find_reads_stdin() {
    let input = r#"{"request": {"duration": 60, "attendees": ["alice"]}}"#;

    meetq()
        .arg("find")
        .write_stdin(input)
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""start": 0"#))
        .stdout(predicate::str::contains(r#""end": 1440"#));
}

#[test]
fn find_with_no_room_prints_empty_array() {
    let input = r#"{
        "events": [{"when": {"start": 0, "end": 1440}, "attendees": ["alice"]}],
        "request": {"duration": 30, "attendees": ["alice"]}
    }"#;

    let output = meetq().arg("find").write_stdin(input).output().unwrap();

    assert!(output.status.success());
    let slots: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(slots, serde_json::json!([]));
}

#[test]
fn find_explain_reports_all_attendees_phase() {
    let result = find_json(&["-i", &fixture("day.json"), "--explain"]);

    assert_eq!(result["phase"], "all_attendees");
    assert_eq!(result["slots"].as_array().unwrap().len(), 3);
}

#[test]
fn find_explain_reports_dropped_optional_attendees() {
    let result = find_json(&["-i", &fixture("optional_dropped.json"), "--explain"]);

    assert_eq!(result["phase"], "required_only");
    assert_eq!(result["slots"][1]["start"], 510);
}

#[test]
fn find_text_format_prints_clock_times() {
    meetq()
        .args(["find", "-i", &fixture("day.json"), "--format", "text"])
        .assert()
        .success()
        .stdout(predicate::str::contains("00:00-08:00 (480 min)"))
        .stdout(predicate::str::contains("08:30-09:00 (30 min)"))
        .stdout(predicate::str::contains("09:30-24:00 (870 min)"));
}

#[test]
fn find_text_format_with_explain_and_no_slots() {
    let input = r#"{
        "events": [{"when": {"start": 0, "end": 1440}, "attendees": ["alice"]}],
        "request": {"duration": 30, "attendees": ["alice"], "optional_attendees": ["bob"]}
    }"#;

    meetq()
        .args(["find", "--format", "text", "--explain"])
        .write_stdin(input)
        .assert()
        .success()
        .stdout(predicate::str::contains("phase: required_only"))
        .stdout(predicate::str::contains("none"));
}

#[test]
fn find_writes_output_file() {
    let output_path = std::env::temp_dir().join("meetq-test-find-output.json");
    let _ = std::fs::remove_file(&output_path);

    meetq()
        .args(["find", "-i", &fixture("day.json"), "-o"])
        .arg(&output_path)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let content = std::fs::read_to_string(&output_path).expect("output file must exist");
    let slots: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(slots.as_array().unwrap().len(), 3);

    let _ = std::fs::remove_file(&output_path);
}

#[test]
fn find_rejects_event_outside_the_day() {
    meetq()
        .args(["find", "-i", &fixture("out_of_day.json")])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid query document"))
        .stderr(predicate::str::contains("Invalid time range"));
}

#[test]
fn find_rejects_invalid_json() {
    meetq()
        .arg("find")
        .write_stdin("this is not valid json {{{")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid query document"));
}

#[test]
fn find_missing_file_fails() {
    meetq()
        .args(["find", "-i", "/nonexistent/path/day.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read file"));
}

// ─────────────────────────────────────────────────────────────────────────────
// validate
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn validate_accepts_good_document() {
    meetq()
        .args(["validate", "-i", &fixture("day.json")])
        .assert()
        .success()
        .stdout(predicate::str::contains("ok: 3 events, duration 30 min"));
}

#[test]
fn validate_rejects_bad_document() {
    meetq()
        .args(["validate", "-i", &fixture("out_of_day.json")])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid time range"));
}

// ─────────────────────────────────────────────────────────────────────────────
// General
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn help_lists_subcommands() {
    meetq()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("find"))
        .stdout(predicate::str::contains("validate"));
}

#[test]
fn debug_logging_goes_to_stderr() {
    let output = meetq()
        .args(["find", "-i", &fixture("day.json")])
        .env("RUST_LOG", "meeting_finder=debug")
        .output()
        .unwrap();

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("resolved with all attendees"), "{stderr}");
    serde_json::from_slice::<serde_json::Value>(&output.stdout).expect("stdout stays JSON");
}
