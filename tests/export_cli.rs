use std::process::{Command, Output};

use serde_json::Value;

fn export_openapi(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_export_openapi"))
        .args(args)
        .output()
        .unwrap()
}

#[test]
fn test_writes_json_into_nested_directory() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("docs/assets/openapi/openapi.json");

    let result = export_openapi(&[output.to_str().unwrap()]);
    assert!(result.status.success());

    let value: Value = serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(value["openapi"], "3.1.0");
    assert_eq!(
        value["components"]["securitySchemes"]["BearerAuth"]["bearerFormat"],
        "JWT"
    );
}

#[test]
fn test_writes_yaml() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("openapi.yaml");

    let result = export_openapi(&["--format", "yaml", output.to_str().unwrap()]);
    assert!(result.status.success());

    let yaml = std::fs::read_to_string(&output).unwrap();
    assert!(yaml.contains("title: Project API"));
    assert!(yaml.contains("BearerAuth"));
}

#[test]
fn test_prints_to_stdout_without_output_path() {
    let result = export_openapi(&[]);
    assert!(result.status.success());

    let value: Value = serde_json::from_slice(&result.stdout).unwrap();
    assert_eq!(value["info"]["title"], "Project API");
}

#[test]
fn test_config_file_overrides_title() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("docs.json");
    std::fs::write(&config, r#"{ "title": "Project API (staging)" }"#).unwrap();
    let output = dir.path().join("openapi.json");

    let result = export_openapi(&[
        "--config",
        config.to_str().unwrap(),
        output.to_str().unwrap(),
    ]);
    assert!(result.status.success());

    let value: Value = serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(value["info"]["title"], "Project API (staging)");
}

#[test]
fn test_missing_config_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("openapi.json");

    let result = export_openapi(&[
        "--config",
        dir.path().join("absent.json").to_str().unwrap(),
        output.to_str().unwrap(),
    ]);
    assert!(!result.status.success());
    assert!(!output.exists());
}
