//! Tests for the `replay` command, run against the built binary.

use std::fs;
use std::process::Command;

use tempfile::TempDir;

fn cli_cmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_redux-collections"))
}

fn write_fixture(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).expect("Failed to write fixture");
    path
}

const CONFIG: &str = r#"
[[collections]]
name = "feed"

[[maps]]
name = "posts"
collections = ["comments"]
"#;

const ACTIONS: &str = r#"{"type":"@@redux-collections/COLLECTION_APPEND","collection":"feed","items":[1,2,3]}
{"type":"@@redux-collections/COLLECTION_REMOVE","collection":"feed","id":1}

{"type":"@@redux-collections/MAP_ADD","map":"posts","items":{"1":{"title":"hello"}}}
{"type":"@@redux-collections/COLLECTION_APPEND","collection":"comments","map":"posts","parentId":1,"items":[7]}
{"type":"@@redux-collections/MAP_ADD","map":"posts","items":{"2":"draft"}}
{"type":"SOMETHING_ELSE"}
"#;

#[test]
fn test_help_shows_replay_command() {
    let output = cli_cmd()
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("replay"));
}

#[test]
fn test_replay_prints_final_state() {
    let dir = TempDir::new().unwrap();
    let config = write_fixture(&dir, "reducers.toml", CONFIG);
    let actions = write_fixture(&dir, "actions.jsonl", ACTIONS);

    let output = cli_cmd()
        .arg("replay")
        .arg("--config")
        .arg(&config)
        .arg(&actions)
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let state: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(state["collections"]["feed"], serde_json::json!({ "items": [2, 3] }));
    assert_eq!(state["maps"]["posts"]["2"], serde_json::json!("draft"));
    assert_eq!(
        state["maps"]["posts"]["1"],
        serde_json::json!({
            "title": "hello",
            "comments": { "items": [7] }
        })
    );
}

#[test]
fn test_invalid_action_exits_with_error() {
    let dir = TempDir::new().unwrap();
    let config = write_fixture(&dir, "reducers.toml", CONFIG);
    let actions = write_fixture(
        &dir,
        "actions.jsonl",
        "{\"type\":\"@@redux-collections/COLLECTION_APPEND\",\"collection\":\"feed\"}\n",
    );

    let output = cli_cmd()
        .arg("replay")
        .arg("--config")
        .arg(&config)
        .arg(&actions)
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("line 1"), "stderr: {}", stderr);
    assert!(stderr.contains("missing required field 'items'"), "stderr: {}", stderr);
}

#[test]
fn test_config_with_extension_is_rejected() {
    let dir = TempDir::new().unwrap();
    let config = write_fixture(&dir, "reducers.toml", "[[collections]]\nname = \"feed\"\nextension = \"audit\"\n");
    let actions = write_fixture(&dir, "actions.jsonl", "");

    let output = cli_cmd()
        .arg("replay")
        .arg("--config")
        .arg(&config)
        .arg(&actions)
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("'audit'"), "stderr: {}", stderr);
}
