use std::path::PathBuf;
use std::process::Command;
use std::time::{SystemTime, UNIX_EPOCH};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

fn temp_path(file_name: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    std::env::temp_dir().join(format!("taskbook-{nanos}-{file_name}"))
}

fn run(store_path: &PathBuf, args: &[&str]) -> std::process::Output {
    let exe = env!("CARGO_BIN_EXE_taskbook");
    Command::new(exe)
        .args(args)
        .env("TASKBOOK_STORE_PATH", store_path)
        .env("TASKBOOK_CONFIG_PATH", temp_path("no-config.json"))
        .output()
        .expect("failed to run taskbook")
}

#[test]
fn add_command_persists_task_with_id_one() {
    let store_path = temp_path("cli-add.json");
    let output = run(&store_path, &["add", "demo task"]);

    let stored: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&store_path).unwrap()).unwrap();
    std::fs::remove_file(&store_path).ok();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Added task: demo task (1)"));

    let tasks = stored.as_array().expect("array blob");
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0]["id"], 1);
    assert_eq!(tasks[0]["text"], "demo task");
    assert_eq!(tasks[0]["completed"], false);
    OffsetDateTime::parse(
        tasks[0]["created_at"].as_str().expect("created_at string"),
        &Rfc3339,
    )
    .expect("created_at rfc3339");
}

#[test]
fn add_command_assigns_one_past_highest_existing_id() {
    let store_path = temp_path("cli-add-next-id.json");
    let existing = serde_json::json!([
        {
            "id": 1,
            "text": "first",
            "completed": false,
            "created_at": "2026-01-10T00:00:00Z"
        },
        {
            "id": 7,
            "text": "gap",
            "completed": true,
            "created_at": "2026-01-10T00:00:00Z"
        }
    ]);
    std::fs::write(&store_path, existing.to_string()).unwrap();

    let output = run(&store_path, &["add", "third"]);

    let stored: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&store_path).unwrap()).unwrap();
    std::fs::remove_file(&store_path).ok();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Added task: third (8)"));
    assert_eq!(stored.as_array().unwrap().len(), 3);
    assert_eq!(stored[2]["id"], 8);
}

#[test]
fn add_command_rejects_missing_text() {
    let store_path = temp_path("cli-add-missing.json");
    let output = run(&store_path, &["add"]);

    std::fs::remove_file(&store_path).ok();
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("ERROR: invalid_input - text is required"));
}

#[test]
fn add_command_rejects_blank_text() {
    let store_path = temp_path("cli-add-blank.json");
    let output = run(&store_path, &["add", "   "]);

    std::fs::remove_file(&store_path).ok();
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("ERROR: invalid_input - text is required"));
}

#[test]
fn add_command_json_outputs_task() {
    let store_path = temp_path("cli-add-json.json");
    let output = run(&store_path, &["add", "demo task", "--json"]);

    std::fs::remove_file(&store_path).ok();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let task: serde_json::Value = serde_json::from_str(stdout.trim()).unwrap();
    assert_eq!(task["id"], 1);
    assert_eq!(task["text"], "demo task");
    assert_eq!(task["completed"], false);
}
