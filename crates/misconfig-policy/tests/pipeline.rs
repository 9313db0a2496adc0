//! Pipeline tests against files on disk

use misconfig_core::{Error, OutputFormat};
use misconfig_policy::{Policy, PolicyGenerator};
use serde_json::{json, Value};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_json_to_json_matches_reference_document() {
    let dir = TempDir::new().unwrap();
    let input = write(&dir, "config.json", r#"{"port": 8080, "debug": true}"#);
    let output = dir.path().join("policy.json");

    PolicyGenerator::default()
        .run(&input, &output, OutputFormat::Json)
        .unwrap();

    let written: Value = serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(
        written,
        json!({
            "policy_name": "Generated Security Policy",
            "rules": [
                {
                    "rule_name": "Check port",
                    "description": "Ensure port is configured correctly.",
                    "value": 8080
                },
                {
                    "rule_name": "Check debug",
                    "description": "Ensure debug is configured correctly.",
                    "value": true
                }
            ],
            "metadata": {"generated_by": "misconfig-Policy-Generator", "version": "1.0"}
        })
    );
}

#[test]
fn test_yaml_to_yaml() {
    let dir = TempDir::new().unwrap();
    let input = write(
        &dir,
        "config.yml",
        "---\ndatabase:\n  host: db.internal\n  port: 5432\nreplicas: 3\n",
    );
    let output = dir.path().join("policy.yaml");

    let policy = PolicyGenerator::default()
        .run(&input, &output, OutputFormat::Yaml)
        .unwrap();
    assert_eq!(policy.rules.len(), 2);

    let written: Policy = serde_yaml::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(written, policy);
    assert_eq!(written.rules[0].value, json!({"host": "db.internal", "port": 5432}));
}

#[test]
fn test_json_round_trip_preserves_rule_order() {
    let dir = TempDir::new().unwrap();
    let input = write(&dir, "config.json", r#"{"zeta": 1, "alpha": [1, 2], "mid": {"x": null}}"#);
    let output = dir.path().join("policy.json");

    let policy = PolicyGenerator::default()
        .run(&input, &output, OutputFormat::Json)
        .unwrap();

    let back: Policy = serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(back, policy);
    let names: Vec<_> = back.rules.iter().map(|r| r.rule_name.as_str()).collect();
    assert_eq!(names, vec!["Check zeta", "Check alpha", "Check mid"]);
}

#[test]
fn test_lint_failure_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let long_value = "x ".repeat(60);
    let input = write(&dir, "config.yaml", &format!("---\nkey: {}\n", long_value.trim_end()));
    let output = dir.path().join("policy.json");

    let err = PolicyGenerator::default()
        .run(&input, &output, OutputFormat::Json)
        .unwrap_err();
    assert!(matches!(err, Error::Validation(_)));
    assert!(!output.exists());
}

#[test]
fn test_invalid_json_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let input = write(&dir, "config.json", r#"{"port": 8080,}"#);
    let output = dir.path().join("policy.json");

    let err = PolicyGenerator::default()
        .run(&input, &output, OutputFormat::Json)
        .unwrap_err();
    assert!(matches!(err, Error::Parse(_)));
    assert!(!output.exists());
}

#[test]
fn test_unknown_extension_fails_before_parsing() {
    let dir = TempDir::new().unwrap();
    // Valid JSON content: the extension alone must decide.
    let input = write(&dir, "config.txt", r#"{"port": 8080}"#);
    let output = dir.path().join("policy.json");

    let err = PolicyGenerator::default()
        .run(&input, &output, OutputFormat::Json)
        .unwrap_err();
    assert!(matches!(err, Error::UnsupportedFormat(_)));
    assert!(!output.exists());
}

#[test]
fn test_array_root_fails() {
    let dir = TempDir::new().unwrap();
    let input = write(&dir, "config.json", "[1, 2, 3]");
    let output = dir.path().join("policy.json");

    let err = PolicyGenerator::default()
        .run(&input, &output, OutputFormat::Json)
        .unwrap_err();
    assert!(matches!(err, Error::Type(_)));
    assert!(!output.exists());
}

#[test]
fn test_existing_output_overwritten() {
    let dir = TempDir::new().unwrap();
    let input = write(&dir, "config.json", r#"{"a": 1}"#);
    let output = write(&dir, "policy.json", "stale content that is much longer than needed");

    PolicyGenerator::default()
        .run(&input, &output, OutputFormat::Json)
        .unwrap();
    let written = fs::read_to_string(&output).unwrap();
    assert!(!written.contains("stale"));
}

#[test]
fn test_unwritable_output_is_io_error() {
    let dir = TempDir::new().unwrap();
    let input = write(&dir, "config.json", r#"{"a": 1}"#);
    let output = dir.path().join("missing-dir").join("policy.json");

    let err = PolicyGenerator::default()
        .run(&input, &output, OutputFormat::Json)
        .unwrap_err();
    assert!(matches!(err, Error::Io { .. }));
}

#[test]
fn test_apostrophe_in_flow_does_not_hide_later_findings() {
    let dir = TempDir::new().unwrap();
    let input = write(&dir, "config.yaml", "---\na: [it's]\nb:   1\n");
    let output = dir.path().join("policy.json");

    let err = PolicyGenerator::default()
        .run(&input, &output, OutputFormat::Json)
        .unwrap_err();
    match err {
        Error::Validation(findings) => assert!(findings[0].contains("colons")),
        other => panic!("unexpected error: {}", other),
    }
    assert!(!output.exists());
}
