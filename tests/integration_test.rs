// Integration tests for Tessera

use std::io::Write;
use std::process::{Command, Stdio};

fn tessera() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_tessera"));
    cmd.env("NO_COLOR", "1").env_remove("TESSERA_EMBED_DIM");
    cmd
}

#[test]
fn test_version_display() {
    let output = tessera()
        .arg("--version")
        .output()
        .expect("Failed to run tessera --version");

    assert!(output.status.success(), "Version command failed");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("tessera"), "Expected 'tessera' in version output");
}

#[test]
fn test_help_display() {
    let output = tessera()
        .arg("--help")
        .output()
        .expect("Failed to run tessera --help");

    assert!(output.status.success(), "Help command failed");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("organize") && stdout.contains("search") && stdout.contains("repl"),
        "Expected organize, search and repl in help output"
    );
}

#[test]
fn test_organize_demo_export() {
    let output = tessera()
        .args(["organize", "--demo", "--export", "-"])
        .output()
        .expect("Failed to run tessera organize");

    assert!(output.status.success(), "Organize command failed");

    let json: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("Export is not valid JSON");

    assert_eq!(json["total_items"], 18);
    assert_eq!(json["tiles"].as_array().map(Vec::len), Some(18));

    let clusters = json["clusters"].as_array().expect("clusters array");
    let members: usize = clusters
        .iter()
        .map(|c| c["members"].as_array().map_or(0, Vec::len))
        .sum();
    assert!(!clusters.is_empty());
    assert_eq!(members, 18, "Every snippet belongs to exactly one cluster");
    assert!(json["grid"]["cols"].as_u64().unwrap_or(0) >= 4);
}

#[test]
fn test_organize_reads_stdin() {
    let mut child = tessera()
        .args(["organize", "--export", "-"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .expect("Failed to spawn tessera organize");

    child
        .stdin
        .take()
        .expect("stdin")
        .write_all(b"red apple\n# comment\n\ngreen apple\nfast car\n")
        .expect("Failed to write snippets");

    let output = child.wait_with_output().expect("Failed to wait for tessera");
    assert!(output.status.success(), "Organize from stdin failed");

    let json: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("Export is not valid JSON");
    assert_eq!(json["total_items"], 3);
    assert_eq!(json["tiles"][0]["text"], "red apple");
    assert_eq!(json["tiles"][1]["text"], "green apple");
}

#[test]
fn test_search_demo() {
    let output = tessera()
        .args(["search", "sports car", "--demo", "-n", "3"])
        .output()
        .expect("Failed to run tessera search");

    assert!(output.status.success(), "Search command failed");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Fast sports car"), "Expected exact match in results");
    assert!(!stdout.contains(" 4. "), "Expected at most 3 results");
}

#[test]
fn test_missing_file_fails() {
    let output = tessera()
        .args(["organize", "does-not-exist.txt"])
        .output()
        .expect("Failed to run tessera organize");

    assert!(!output.status.success(), "Expected failure for missing file");
}
