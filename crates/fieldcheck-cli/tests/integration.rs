#![allow(deprecated)]
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn fieldcheck(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("fieldcheck").unwrap();
    cmd.current_dir(dir.path()).env("FIELDCHECK_ROOT", dir.path());
    cmd
}

fn write_payload(dir: &TempDir, name: &str, body: serde_json::Value) -> std::path::PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, serde_json::to_vec(&body).unwrap()).unwrap();
    path
}

// ---------------------------------------------------------------------------
// fieldcheck init
// ---------------------------------------------------------------------------

#[test]
fn init_writes_config() {
    let dir = TempDir::new().unwrap();
    fieldcheck(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("created: .fieldcheck/config.yaml"));

    let content = std::fs::read_to_string(dir.path().join(".fieldcheck/config.yaml")).unwrap();
    assert!(content.contains("assignment"));
}

#[test]
fn init_is_idempotent() {
    let dir = TempDir::new().unwrap();
    fieldcheck(&dir).arg("init").assert().success();
    std::fs::write(
        dir.path().join(".fieldcheck/config.yaml"),
        "version: 1\nserver:\n  port: 9999\n",
    )
    .unwrap();

    fieldcheck(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("exists:"));

    let content = std::fs::read_to_string(dir.path().join(".fieldcheck/config.yaml")).unwrap();
    assert!(content.contains("9999"), "init must not overwrite an existing config");
}

// ---------------------------------------------------------------------------
// fieldcheck resolve
// ---------------------------------------------------------------------------

#[test]
fn resolve_prints_each_form() {
    let dir = TempDir::new().unwrap();
    fieldcheck(&dir)
        .args(["resolve", "user:1", "1", "team:1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("user:1"))
        .stdout(predicate::str::contains("team"));
}

#[test]
fn resolve_json_output() {
    let dir = TempDir::new().unwrap();
    let output = fieldcheck(&dir)
        .args(["--json", "resolve", "1", "team:3"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json[0]["type"], "user");
    assert_eq!(json[0]["id"], 1);
    assert_eq!(json[0]["identifier"], "user:1");
    assert_eq!(json[1]["type"], "team");
    assert_eq!(json[1]["id"], 3);
}

#[test]
fn resolve_unknown_prefix_fails() {
    let dir = TempDir::new().unwrap();
    fieldcheck(&dir)
        .args(["resolve", "foo:1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("foo:1: Unknown actor input"));
}

#[test]
fn resolve_mixed_reports_failure_count() {
    let dir = TempDir::new().unwrap();
    let output = fieldcheck(&dir)
        .args(["--json", "resolve", "user:2", "nope"])
        .output()
        .unwrap();
    assert!(!output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json[0]["id"], 2);
    assert_eq!(json[1]["errors"], serde_json::json!(["Unknown actor input"]));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("1 of 2"));
}

#[test]
fn resolve_requires_a_token() {
    let dir = TempDir::new().unwrap();
    fieldcheck(&dir).arg("resolve").assert().failure();
}

// ---------------------------------------------------------------------------
// fieldcheck validate
// ---------------------------------------------------------------------------

#[test]
fn validate_accepts_payload_without_init() {
    let dir = TempDir::new().unwrap();
    let path = write_payload(
        &dir,
        "ok.json",
        serde_json::json!({
            "assignee": "team:1",
            "rules": [{ "matcher": "path", "pattern": "*.rs" }],
        }),
    );

    let output = fieldcheck(&dir)
        .args(["--json", "validate"])
        .arg(&path)
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        json["validated_data"]["assignee"],
        serde_json::json!({ "type": "team", "id": 1 })
    );
    assert_eq!(json["validated_data"]["rules"][0]["pattern"], "*.rs");
}

#[test]
fn validate_reads_stdin() {
    let dir = TempDir::new().unwrap();
    fieldcheck(&dir)
        .args(["validate", "-"])
        .write_stdin(r#"{"assignee": "1"}"#)
        .assert()
        .success()
        .stdout(predicate::str::contains("valid: 1 field(s) accepted"));
}

#[test]
fn validate_reports_field_errors() {
    let dir = TempDir::new().unwrap();
    let path = write_payload(
        &dir,
        "bad.json",
        serde_json::json!({ "assignee": "foo:1", "rules": [{ "matcher": "path" }] }),
    );

    let output = fieldcheck(&dir)
        .args(["--json", "validate", "--schema", "assignment"])
        .arg(&path)
        .output()
        .unwrap();
    assert!(!output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        json["errors"],
        serde_json::json!({
            "assignee": ["Unknown actor input"],
            "rules": { "pattern": ["This field is required."] },
        })
    );
}

#[test]
fn validate_human_output_uses_dotted_paths() {
    let dir = TempDir::new().unwrap();
    let path = write_payload(&dir, "bad.json", serde_json::json!({ "rules": [null] }));

    fieldcheck(&dir)
        .arg("validate")
        .arg(&path)
        .assert()
        .failure()
        .stdout(predicate::str::contains("rules: This field may not be null."))
        .stderr(predicate::str::contains("payload failed validation"));
}

#[test]
fn validate_unknown_schema_fails() {
    let dir = TempDir::new().unwrap();
    let path = write_payload(&dir, "ok.json", serde_json::json!({}));

    fieldcheck(&dir)
        .args(["validate", "--schema", "missing"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("schema not found: missing"));
}

#[test]
fn validate_uses_custom_schema_from_config() {
    let dir = TempDir::new().unwrap();
    std::fs::create_dir_all(dir.path().join(".fieldcheck")).unwrap();
    std::fs::write(
        dir.path().join(".fieldcheck/config.yaml"),
        "schemas:\n  owners:\n    owner:\n      type: actor\n",
    )
    .unwrap();
    let path = write_payload(&dir, "empty.json", serde_json::json!({}));

    fieldcheck(&dir)
        .args(["validate", "-s", "owners"])
        .arg(&path)
        .assert()
        .failure()
        .stdout(predicate::str::contains("owner: This field is required."));
}

#[test]
fn validate_rejects_invalid_json() {
    let dir = TempDir::new().unwrap();
    fieldcheck(&dir)
        .arg("validate")
        .write_stdin("{not json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("payload is not valid JSON"));
}

// ---------------------------------------------------------------------------
// fieldcheck config
// ---------------------------------------------------------------------------

#[test]
fn config_validate_requires_init() {
    let dir = TempDir::new().unwrap();
    fieldcheck(&dir)
        .args(["config", "validate"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not initialized"));
}

#[test]
fn config_validate_default_is_clean() {
    let dir = TempDir::new().unwrap();
    fieldcheck(&dir).arg("init").assert().success();
    fieldcheck(&dir)
        .args(["config", "validate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Config is valid"));
}

#[test]
fn config_validate_flags_errors() {
    let dir = TempDir::new().unwrap();
    std::fs::create_dir_all(dir.path().join(".fieldcheck")).unwrap();
    std::fs::write(
        dir.path().join(".fieldcheck/config.yaml"),
        "schemas:\n  tags:\n    code:\n      type: char\n      max_length: 0\n",
    )
    .unwrap();

    fieldcheck(&dir)
        .args(["config", "validate"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("[error] field 'tags.code'"));
}

#[test]
fn config_validate_rejects_future_version() {
    let dir = TempDir::new().unwrap();
    std::fs::create_dir_all(dir.path().join(".fieldcheck")).unwrap();
    std::fs::write(dir.path().join(".fieldcheck/config.yaml"), "version: 2\n").unwrap();

    fieldcheck(&dir)
        .args(["config", "validate"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unsupported config version 2"));
}

#[test]
fn config_validate_rejects_misspelled_option() {
    let dir = TempDir::new().unwrap();
    std::fs::create_dir_all(dir.path().join(".fieldcheck")).unwrap();
    std::fs::write(
        dir.path().join(".fieldcheck/config.yaml"),
        "schemas:\n  tags:\n    code:\n      type: char\n      max_lenght: 8\n",
    )
    .unwrap();

    fieldcheck(&dir)
        .args(["config", "validate"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("max_lenght"));
}

#[test]
fn config_show_lists_schema_fields() {
    let dir = TempDir::new().unwrap();
    fieldcheck(&dir)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("server: 127.0.0.1:3141"))
        .stdout(predicate::str::contains("assignee"))
        .stdout(predicate::str::contains("rules"));
}
