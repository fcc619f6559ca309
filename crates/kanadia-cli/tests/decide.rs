//! End-to-end runs of `kanadia decide` against the JSON fixtures in `tests/fixtures/`.
//!
//! Every run pins `--as-of 2014-12-01` so visa windows are deterministic, and runs from an
//! empty temp directory so no stray `kanadia.toml` is picked up.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const AS_OF: &str = "2014-12-01";

#[allow(deprecated)]
fn kanadia_cmd() -> Command {
    Command::cargo_bin("kanadia").expect("kanadia binary not found - run `cargo build` first")
}

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .expect("kanadia-cli crate should have a parent directory")
        .parent()
        .expect("crates directory should have a parent (repo root)")
        .join("tests")
        .join("fixtures")
}

fn decide_cmd(cwd: &Path, entries: &str) -> Command {
    let fixtures = fixtures_dir();
    let mut cmd = kanadia_cmd();
    cmd.current_dir(cwd)
        .arg("--countries")
        .arg(fixtures.join("countries.json"))
        .arg("--watchlist")
        .arg(fixtures.join("watchlist.json"))
        .arg("--entries")
        .arg(fixtures.join(entries))
        .arg("--as-of")
        .arg(AS_OF);
    cmd
}

fn run_decide(entries: &str) -> Vec<String> {
    let tmp = TempDir::new().expect("temp dir");
    let output = decide_cmd(tmp.path(), entries)
        .arg("decide")
        .output()
        .expect("run kanadia");
    assert!(
        output.status.success(),
        "kanadia decide failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("verdict array")
}

#[test]
fn returning_citizens_are_accepted() {
    assert_eq!(run_decide("entries_returning.json"), ["Accept", "Accept"]);
}

#[test]
fn passport_on_watchlist_goes_to_secondary() {
    assert_eq!(run_decide("entries_watchlist.json"), ["Secondary"]);
}

#[test]
fn medical_advisory_quarantines_even_watchlisted_travellers() {
    assert_eq!(
        run_decide("entries_quarantine.json"),
        ["Quarantine", "Quarantine"]
    );
}

#[test]
fn visa_requirements_follow_origin_country() {
    assert_eq!(
        run_decide("entries_visas.json"),
        ["Reject", "Accept", "Reject", "Accept"]
    );
}

#[test]
fn malformed_records_are_rejected() {
    assert_eq!(
        run_decide("entries_malformed.json"),
        ["Reject", "Reject", "Reject", "Reject"]
    );
}

#[test]
fn parallel_mode_matches_sequential() {
    let tmp = TempDir::new().expect("temp dir");
    let output = decide_cmd(tmp.path(), "entries_visas.json")
        .arg("--parallel")
        .arg("decide")
        .output()
        .expect("run kanadia");
    assert!(output.status.success());

    let verdicts: Vec<String> = serde_json::from_slice(&output.stdout).expect("verdict array");
    assert_eq!(verdicts, run_decide("entries_visas.json"));
}

#[test]
fn report_out_carries_codes_and_counts() {
    let tmp = TempDir::new().expect("temp dir");
    let report_path = tmp.path().join("out").join("report.json");

    decide_cmd(tmp.path(), "entries_malformed.json")
        .arg("decide")
        .arg("--report-out")
        .arg(&report_path)
        .assert()
        .success();

    let text = std::fs::read_to_string(&report_path).expect("read report");
    let report: Value = serde_json::from_str(&text).expect("parse report");

    assert_eq!(report["schema"], "kanadia.decisions.v1");
    assert_eq!(report["as_of"], AS_OF);
    assert_eq!(report["counts"]["reject"], 4);
    assert_eq!(report["counts"]["accept"], 0);

    let codes: Vec<&str> = report["decisions"]
        .as_array()
        .expect("decisions array")
        .iter()
        .map(|d| d["code"].as_str().expect("code"))
        .collect();
    assert_eq!(
        codes,
        [
            "incomplete_record",
            "invalid_passport",
            "invalid_birth_date",
            "unknown_origin"
        ]
    );
}

#[test]
fn md_renders_saved_report() {
    let tmp = TempDir::new().expect("temp dir");
    let report_path = tmp.path().join("report.json");
    let md_path = tmp.path().join("report.md");

    decide_cmd(tmp.path(), "entries_visas.json")
        .arg("decide")
        .arg("--report-out")
        .arg(&report_path)
        .arg("--markdown-out")
        .arg(&md_path)
        .assert()
        .success();

    let direct = std::fs::read_to_string(&md_path).expect("read markdown");

    let output = kanadia_cmd()
        .current_dir(tmp.path())
        .arg("md")
        .arg("--report")
        .arg(&report_path)
        .output()
        .expect("run kanadia md");
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), direct);

    assert!(direct.starts_with("# Kanadia entry decisions\n"));
    assert!(direct.contains("`visitor_visa_invalid`"));
    assert!(direct.contains("`transit_visa_invalid`"));
}

#[test]
fn config_file_supplies_paths_and_date() {
    let tmp = TempDir::new().expect("temp dir");
    let fixtures = fixtures_dir();
    let config = format!(
        "countries = {:?}\nwatchlist = {:?}\nentries = {:?}\nas_of = {:?}\n",
        fixtures.join("countries.json").display().to_string(),
        fixtures.join("watchlist.json").display().to_string(),
        fixtures.join("entries_visas.json").display().to_string(),
        AS_OF,
    );
    std::fs::write(tmp.path().join("kanadia.toml"), config).expect("write config");

    let output = kanadia_cmd()
        .current_dir(tmp.path())
        .arg("decide")
        .output()
        .expect("run kanadia");
    assert!(output.status.success());

    let verdicts: Vec<String> = serde_json::from_slice(&output.stdout).expect("verdict array");
    assert_eq!(verdicts, ["Reject", "Accept", "Reject", "Accept"]);
}

#[test]
fn missing_entries_file_is_an_error() {
    let tmp = TempDir::new().expect("temp dir");

    decide_cmd(tmp.path(), "no_such_entries.json")
        .arg("decide")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("kanadia error:"))
        .stderr(predicate::str::contains("no_such_entries.json"));
}

#[test]
fn runtime_error_is_reported_once() {
    let tmp = TempDir::new().expect("temp dir");
    let output = decide_cmd(tmp.path(), "no_such_entries.json")
        .arg("decide")
        .output()
        .expect("run kanadia");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(stderr.matches("load inputs:").count(), 1, "stderr: {stderr}");
}

#[test]
fn invalid_as_of_is_an_error() {
    let tmp = TempDir::new().expect("temp dir");
    let fixtures = fixtures_dir();

    kanadia_cmd()
        .current_dir(tmp.path())
        .arg("--entries")
        .arg(fixtures.join("entries_visas.json"))
        .arg("--as-of")
        .arg("2014-13-01")
        .arg("decide")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("invalid as_of"));
}
