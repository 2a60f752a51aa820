#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use common::temp_files::write_file;
use std::fs;
use std::path::Path;
use std::process::{Command, Output};

fn run(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_apispec-gen"))
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .args(args)
        .output()
        .expect("run cli")
}

fn project_with_fixture() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    let registry = fs::read_to_string(common::fixture_registry()).unwrap();
    write_file(dir.path(), "config/api.yml", &registry);
    dir
}

#[test]
fn test_cli_generate_with_defaults() {
    let dir = project_with_fixture();

    let output = run(dir.path(), &["generate"]);
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    let written = fs::read_to_string(dir.path().join("config/openapi.json")).unwrap();
    let doc: serde_json::Value = serde_json::from_str(&written).unwrap();
    assert_eq!(doc["paths"]["/vms"]["delete"], serde_json::json!({}));
    assert!(doc["components"]["schemas"]["Host"].is_object());
}

#[test]
fn test_cli_check_detects_drift() {
    let dir = project_with_fixture();

    assert!(!run(dir.path(), &["check"]).status.success());
    assert!(run(dir.path(), &["generate"]).status.success());
    assert!(run(dir.path(), &["check"]).status.success());

    let registry = dir.path().join("config/api.yml");
    let mut content = fs::read_to_string(&registry).unwrap();
    content = content.replace("verbs: [get, put]", "verbs: [get]");
    fs::write(&registry, content).unwrap();
    assert!(!run(dir.path(), &["check"]).status.success());
}

#[test]
fn test_cli_print_matches_generate() {
    let dir = project_with_fixture();

    let printed = run(dir.path(), &["print"]);
    assert!(printed.status.success());
    assert!(run(dir.path(), &["generate"]).status.success());

    let written = fs::read(dir.path().join("config/openapi.json")).unwrap();
    assert_eq!(printed.stdout, written);
}

#[test]
fn test_cli_config_file_and_legacy_key() {
    let dir = project_with_fixture();
    write_file(
        dir.path(),
        "apispec.toml",
        "output = \"public/openapi.json\"\nlegacy_security_key = true\n",
    );

    assert!(run(dir.path(), &["generate"]).status.success());
    let written = fs::read_to_string(dir.path().join("public/openapi.json")).unwrap();
    assert!(written.contains("\"secuirty\": []"));
    assert!(!dir.path().join("config/openapi.json").exists());
}

#[test]
fn test_cli_unresolved_model_keeps_previous_file() {
    let dir = tempfile::tempdir().unwrap();
    write_file(dir.path(), "config/api.yml", "collections:\n  vms:\n    klass: Vm\n");
    let output_path = write_file(dir.path(), "config/openapi.json", "{}\n");

    let output = run(dir.path(), &["generate"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Vm"));
    assert_eq!(fs::read_to_string(output_path).unwrap(), "{}\n");
}
