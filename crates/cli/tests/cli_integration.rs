//! CLI integration tests for the `atomic-executor` binary.
//!
//! Uses `assert_cmd` to spawn the binary and verify exit codes, stdout
//! content, and stderr content.

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Helper: create a Command for the binary with a clean configuration
/// environment.
fn executor_cmd() -> Command {
    let mut cmd = cargo_bin_cmd!("atomic-executor");
    cmd.env_remove("ATOMIC_EXECUTOR_SERVICE_NAME")
        .env_remove("ATOMIC_EXECUTOR_SERVICE_VERSION")
        .env_remove("ATOMIC_EXECUTOR_HOST")
        .env_remove("ATOMIC_EXECUTOR_PORT")
        .env_remove("RUST_LOG");
    cmd
}

/// Helper: write a request file into `dir` and return its path.
fn write_request(dir: &TempDir, node_type_id: &str, inputs: serde_json::Value) -> PathBuf {
    let path = dir.path().join("request.json");
    let body = serde_json::json!({
        "node_run_id": "node_run_1",
        "run_id": "run_1",
        "node_type_ref": { "node_type_id": node_type_id, "version": "0.1.0" },
        "inputs": inputs,
    });
    fs::write(&path, body.to_string()).unwrap();
    path
}

// ──────────────────────────────────────────────
// 1. Help and version
// ──────────────────────────────────────────────

#[test]
fn help_exits_0_with_description() {
    executor_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Atomic node executor"));
}

#[test]
fn version_subcommand_reports_defaults() {
    let output = executor_cmd()
        .args(["--output", "json", "version"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["service_name"], "arp-atomic-executor");
    assert_eq!(json["supported_api_versions"], serde_json::json!(["v1"]));
}

#[test]
fn version_flag_overrides_beat_environment() {
    executor_cmd()
        .env("ATOMIC_EXECUTOR_SERVICE_NAME", "from-env")
        .env("ATOMIC_EXECUTOR_SERVICE_VERSION", "7.7.7")
        .args(["--service-name", "from-flag", "version"])
        .assert()
        .success()
        .stdout(predicate::str::contains("from-flag 7.7.7 (api: v1)"));
}

#[test]
fn version_reads_config_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("executor.toml");
    fs::write(
        &path,
        "[executor]\nservice_name = \"file-executor\"\nservice_version = \"3.1.4\"\n",
    )
    .unwrap();

    executor_cmd()
        .arg("--config")
        .arg(&path)
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("file-executor 3.1.4"));
}

#[test]
fn malformed_config_file_exits_1() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("executor.toml");
    fs::write(&path, "[executor]\nservice_name = \n").unwrap();

    executor_cmd()
        .arg("--config")
        .arg(&path)
        .arg("version")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error parsing config"));
}

// ──────────────────────────────────────────────
// 2. Node types
// ──────────────────────────────────────────────

#[test]
fn node_types_lists_echo() {
    executor_cmd()
        .arg("node-types")
        .assert()
        .success()
        .stdout("atomic.echo\n");
}

// ──────────────────────────────────────────────
// 3. Execute
// ──────────────────────────────────────────────

#[test]
fn execute_echo_json_output() {
    let dir = TempDir::new().unwrap();
    let request = write_request(&dir, "atomic.echo", serde_json::json!({ "ping": "pong" }));

    let output = executor_cmd()
        .args(["--output", "json", "execute"])
        .arg(&request)
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["state"], "succeeded");
    assert_eq!(json["node_run_id"], "node_run_1");
    assert_eq!(json["outputs"], serde_json::json!({ "echo": { "ping": "pong" } }));
    assert!(json["error"].is_null());
    assert!(json["output_artifacts"].is_null());
}

#[test]
fn execute_echo_text_output() {
    let dir = TempDir::new().unwrap();
    let request = write_request(&dir, "atomic.echo", serde_json::json!({ "ping": "pong" }));

    executor_cmd()
        .arg("execute")
        .arg(&request)
        .assert()
        .success()
        .stdout(predicate::str::contains("node_run_1: succeeded"))
        .stdout(predicate::str::contains("\"ping\": \"pong\""));
}

#[test]
fn execute_unknown_node_type_exits_1() {
    let dir = TempDir::new().unwrap();
    let request = write_request(&dir, "bogus.type", serde_json::json!({}));

    executor_cmd()
        .arg("execute")
        .arg(&request)
        .assert()
        .failure()
        .stdout(predicate::str::contains(
            "unknown_node_type: Unknown node_type_id: bogus.type",
        ));
}

#[test]
fn execute_reads_stdin() {
    let body = serde_json::json!({
        "node_run_id": "from_stdin",
        "run_id": "run_1",
        "node_type_ref": { "node_type_id": "atomic.echo" },
    });

    executor_cmd()
        .args(["--output", "json", "execute", "-"])
        .write_stdin(body.to_string())
        .assert()
        .success()
        .stdout(predicate::str::contains("\"from_stdin\""))
        .stdout(predicate::str::contains("\"echo\": {}"));
}

#[test]
fn execute_invalid_json_exits_1() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("request.json");
    fs::write(&path, "{ not json").unwrap();

    executor_cmd()
        .arg("execute")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("error parsing request"));
}

#[test]
fn execute_missing_file_exits_1() {
    executor_cmd()
        .args(["execute", "/nonexistent/request.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error reading"));
}

#[test]
fn execute_quiet_suppresses_errors() {
    executor_cmd()
        .args(["--quiet", "execute", "/nonexistent/request.json"])
        .assert()
        .failure()
        .stderr(predicate::str::is_empty());
}
