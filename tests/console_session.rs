//! End-to-end sessions against the console binary.

use std::io::Write;
use std::process::{Command, Output, Stdio};

fn run_session(args: &[&str], input: &str) -> Output {
    let bin = env!("CARGO_BIN_EXE_u-taskheap");
    // Point at a file that does not exist so the user's config is ignored.
    let config = std::env::temp_dir().join("u-taskheap-session-test-absent.toml");

    let mut child = Command::new(bin)
        .arg("--config")
        .arg(&config)
        .args(args)
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn console binary");

    child
        .stdin
        .take()
        .expect("stdin not captured")
        .write_all(input.as_bytes())
        .expect("failed to write session input");

    child.wait_with_output().expect("failed to wait for console")
}

#[test]
fn test_seeded_session_follows_priority_order() {
    let output = run_session(&[], "2\n2\n1\nBad priority\n99\n4\n5\n");
    assert!(
        output.status.success(),
        "console exited with non-zero status: {:?}",
        output.status
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    let attended: Vec<&str> = stdout
        .lines()
        .filter_map(|l| l.strip_prefix("   Description: "))
        .collect();
    assert_eq!(
        attended,
        vec!["Fix critical production bug", "Review database server"]
    );
    assert!(stdout.contains("ERROR: priority must be between 1 and 10, got 99."));
    assert!(stdout.contains("Total pending tasks: 2"));
    assert!(stdout.contains("Exiting..."));
}

#[test]
fn test_no_seed_json_listing() {
    let output = run_session(&["--no-seed", "--json"], "1\nWrite docs\n7\n4\n5\n");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let start = stdout.find('[').expect("json listing missing");
    let end = stdout.rfind(']').expect("json listing unterminated");
    let tasks: serde_json::Value =
        serde_json::from_str(&stdout[start..=end]).expect("listing is not json");
    assert_eq!(
        tasks,
        serde_json::json!([{"description": "Write docs", "priority": 7, "sequence": 1}])
    );
}

#[test]
fn test_closed_stdin_exits_cleanly() {
    let output = run_session(&["--no-seed"], "");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.trim_end().ends_with("Exiting..."));
}
