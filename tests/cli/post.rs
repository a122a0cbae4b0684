use crate::cli::support::{create_post, extract_id, inkpost, run_and_get_stdout, run_json, setup_store};
use predicates::prelude::*;
use tempfile::tempdir;

// ============================================================================
// Post command tests
// ============================================================================

#[test]
fn test_post_create_prints_id() {
    let dir = setup_store();

    let output = inkpost()
        .current_dir(dir.path())
        .args(["post", "create", "-t", "Hello", "-b", "First post"])
        .output()
        .unwrap();

    assert!(output.status.success());
    assert!(extract_id(&output).starts_with("ip-"));
}

#[test]
fn test_post_create_json() {
    let dir = setup_store();

    let json = run_json(
        &dir,
        &[
            "post", "create", "--title", "Hello", "--body", "Body", "--image", "img-42",
        ],
    );

    assert!(json["id"].as_str().unwrap().starts_with("ip-"));
    assert_eq!(json["title"], "Hello");
    assert_eq!(json["author_id"], "ada");
    assert_eq!(json["image_storage_id"], "img-42");
}

#[test]
fn test_post_create_without_author_fails() {
    let dir = tempdir().unwrap();
    inkpost()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success();

    inkpost()
        .current_dir(dir.path())
        .args(["post", "create", "--title", "t", "--body", "b"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("no author given"));

    inkpost()
        .current_dir(dir.path())
        .args(["post", "create", "--title", "t", "--body", "b", "--author", "bob"])
        .assert()
        .success();
}

#[test]
fn test_post_create_blank_title_fails() {
    let dir = setup_store();

    inkpost()
        .current_dir(dir.path())
        .args(["post", "create", "--title", "  ", "--body", "b"])
        .assert()
        .code(2);
}

#[test]
fn test_post_list_newest_first() {
    let dir = setup_store();
    let first = create_post(&dir, "First", "one");
    let second = create_post(&dir, "Second", "two");

    let json = run_json(&dir, &["post", "list"]);
    let ids: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["id"].as_str().unwrap())
        .collect();

    assert_eq!(ids, vec![second.as_str(), first.as_str()]);
}

#[test]
fn test_post_list_empty() {
    let dir = setup_store();

    inkpost()
        .current_dir(dir.path())
        .args(["post", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No posts found"));
}

#[test]
fn test_post_show_human() {
    let dir = setup_store();
    let id = create_post(&dir, "Caching notes", "Redis is fast.");

    let stdout = run_and_get_stdout(&dir, &["post", "show", &id]);

    assert!(stdout.contains("Caching notes"));
    assert!(stdout.contains("by ada"));
    assert!(stdout.contains("Redis is fast."));
    assert!(stdout.contains("0 comments"));
}

#[test]
fn test_post_show_missing_exit_code_3() {
    let dir = setup_store();

    inkpost()
        .current_dir(dir.path())
        .args(["post", "show", "ip-ffff"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("post not found"));
}

#[test]
fn test_post_show_malformed_id_exit_code_2() {
    let dir = setup_store();

    inkpost()
        .current_dir(dir.path())
        .args(["post", "show", "not-an-id"])
        .assert()
        .code(2);
}

#[test]
fn test_post_show_json_error_envelope() {
    let dir = setup_store();

    let output = inkpost()
        .current_dir(dir.path())
        .args(["--format", "json", "post", "show", "ip-ffff"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(3));
    let json: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(json["error"]["type"], "not_found");
    assert_eq!(json["error"]["code"], 3);
}
