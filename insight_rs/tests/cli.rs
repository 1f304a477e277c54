//! End-to-end tests for the `insight` binary.

use assert_cmd::Command;
use predicates::prelude::*;

const SAMPLE_PAYLOAD: &str = r#"{
    "a": {"title": "T1", "description": "D1", "requireChart": "true", "details": {"spec": 1}},
    "b": {"title": "T2", "description": "D2", "requireChart": "false"}
}"#;

fn insight_cmd() -> Command {
    Command::cargo_bin("insight").expect("binary builds")
}

#[test]
fn renders_payload_to_html() {
    let dir = tempfile::tempdir().unwrap();
    let payload = dir.path().join("payload.json");
    let output = dir.path().join("page.html");
    std::fs::write(&payload, SAMPLE_PAYLOAD).unwrap();

    insight_cmd()
        .arg(&payload)
        .arg("-o")
        .arg(&output)
        .arg("--highcharts")
        .arg("assets/highcharts.js")
        .assert()
        .success();

    let html = std::fs::read_to_string(&output).unwrap();
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("T1"));
    assert!(html.contains("T2"));
    assert!(html.contains(r#"data-insight-key="a""#));
    assert!(!html.contains(r#"data-insight-key="b""#));
    assert!(html.contains(r#"{"spec":1}"#));
    assert!(html.contains(r#"src="assets/highcharts.js""#));
}

#[test]
fn renders_empty_page_without_payload() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("page.html");

    insight_cmd().arg("-o").arg(&output).assert().success();

    let html = std::fs::read_to_string(&output).unwrap();
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(!html.contains("Insights:"));
}

#[test]
fn fails_on_missing_payload_file() {
    let dir = tempfile::tempdir().unwrap();

    insight_cmd()
        .arg(dir.path().join("nope.json"))
        .arg("-o")
        .arg(dir.path().join("page.html"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read payload"));
}

#[test]
fn fails_on_malformed_payload() {
    let dir = tempfile::tempdir().unwrap();
    let payload = dir.path().join("payload.json");
    std::fs::write(&payload, r#"{"a": {"requireChart": "maybe"}}"#).unwrap();

    insight_cmd()
        .arg(&payload)
        .arg("-o")
        .arg(dir.path().join("page.html"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to parse payload"));
}
