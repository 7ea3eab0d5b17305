// Integration tests for the legis-kpi CLI surface.
//
// These tests use assert_cmd to invoke the binary and verify
// exit codes and argument validation.

#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;

/// Helper to build a Command for the legis-kpi binary.
fn legis_kpi() -> Command {
    Command::cargo_bin("legis-kpi").expect("binary should exist")
}

#[test]
fn cli_version_flag() {
    legis_kpi()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("legis-kpi"));
}

#[test]
fn cli_help_flag() {
    legis_kpi()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Legislative performance indicators"));
}

#[test]
fn score_requires_path() {
    legis_kpi()
        .arg("score")
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn batch_requires_path() {
    legis_kpi()
        .arg("batch")
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn quiet_and_verbose_conflict() {
    legis_kpi()
        .args(["-q", "-v", "check-config"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn score_rejects_unknown_format() {
    legis_kpi()
        .args(["score", "bundle.json", "--format", "sarif"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}
