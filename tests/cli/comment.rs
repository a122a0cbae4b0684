use crate::cli::support::{create_post, extract_id, inkpost, run_json, setup_store};
use predicates::prelude::*;

// ============================================================================
// Comment command tests
// ============================================================================

#[test]
fn test_comment_add_and_list_oldest_first() {
    let dir = setup_store();
    let post_id = create_post(&dir, "Post", "Body");

    let output = inkpost()
        .current_dir(dir.path())
        .args(["comment", "add", &post_id, "--body", "first!"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let first = extract_id(&output);
    assert!(first.starts_with("ic-"));

    inkpost()
        .current_dir(dir.path())
        .args([
            "comment",
            "add",
            &post_id,
            "-b",
            "second",
            "--author",
            "bob",
            "--author-name",
            "Bob B",
        ])
        .assert()
        .success();

    let json = run_json(&dir, &["comment", "list", &post_id]);
    let comments = json.as_array().unwrap();

    assert_eq!(comments.len(), 2);
    assert_eq!(comments[0]["id"], first.as_str());
    assert_eq!(comments[0]["author_name"], "ada");
    assert_eq!(comments[1]["author_name"], "Bob B");
}

#[test]
fn test_comment_on_missing_post() {
    let dir = setup_store();

    inkpost()
        .current_dir(dir.path())
        .args(["comment", "add", "ip-dead", "--body", "hello"])
        .assert()
        .code(3);
}

#[test]
fn test_comment_list_empty() {
    let dir = setup_store();
    let post_id = create_post(&dir, "Quiet post", "Nobody replies");

    inkpost()
        .current_dir(dir.path())
        .args(["comment", "list", &post_id])
        .assert()
        .success()
        .stdout(predicate::str::contains("No comments yet"));
}

#[test]
fn test_post_show_includes_comments() {
    let dir = setup_store();
    let post_id = create_post(&dir, "Post", "Body");
    inkpost()
        .current_dir(dir.path())
        .args(["comment", "add", &post_id, "--body", "nice write-up"])
        .assert()
        .success();

    let json = run_json(&dir, &["post", "show", &post_id]);

    assert_eq!(json["post"]["id"], post_id.as_str());
    assert_eq!(json["comments"][0]["body"], "nice write-up");
}
