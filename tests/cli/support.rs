use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::process::Output;
use tempfile::TempDir;

/// Get a Command for inkpost
pub fn inkpost() -> Command {
    cargo_bin_cmd!("inkpost")
}

/// Extract the record ID printed by `post create` / `comment add` (first line)
pub fn extract_id(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .next()
        .map(|s| s.trim().to_string())
        .unwrap_or_default()
}

/// Set up a store with a default author
pub fn setup_store() -> TempDir {
    let dir = TempDir::new().unwrap();
    inkpost()
        .current_dir(dir.path())
        .args(["init", "--author", "ada"])
        .assert()
        .success();
    dir
}

/// Create a post and return its ID
pub fn create_post(dir: &TempDir, title: &str, body: &str) -> String {
    let output = inkpost()
        .current_dir(dir.path())
        .args(["post", "create", "--title", title, "--body", body])
        .output()
        .unwrap();
    assert!(output.status.success(), "post create failed: {:?}", output);
    extract_id(&output)
}

/// Run inkpost with `--format json` and parse stdout
pub fn run_json(dir: &TempDir, args: &[&str]) -> serde_json::Value {
    let output = inkpost()
        .current_dir(dir.path())
        .arg("--format")
        .arg("json")
        .args(args)
        .output()
        .unwrap();
    assert!(output.status.success(), "command failed: {:?}", output);
    serde_json::from_slice(&output.stdout).unwrap()
}

/// Run inkpost and return stdout as String
pub fn run_and_get_stdout(dir: &TempDir, args: &[&str]) -> String {
    let output = inkpost().current_dir(dir.path()).args(args).output().unwrap();
    String::from_utf8_lossy(&output.stdout).to_string()
}
