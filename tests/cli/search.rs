use crate::cli::support::{create_post, inkpost, run_and_get_stdout, run_json, setup_store};
use predicates::prelude::*;
use tempfile::TempDir;

// ============================================================================
// Search command tests
// ============================================================================

fn result_ids(json: &serde_json::Value) -> Vec<String> {
    json.as_array()
        .unwrap()
        .iter()
        .map(|r| r["id"].as_str().unwrap().to_string())
        .collect()
}

/// Two title matches and one body-only match for "redis"
fn redis_store() -> (TempDir, String, String, String) {
    let dir = setup_store();
    let cache = create_post(&dir, "Redis cache", "x");
    let internals = create_post(&dir, "y", "redis internals");
    let pubsub = create_post(&dir, "Redis pub sub", "z");
    (dir, cache, internals, pubsub)
}

#[test]
fn test_search_empty_store() {
    let dir = setup_store();

    inkpost()
        .current_dir(dir.path())
        .args(["search", "test"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No results found for 'test'"));
}

#[test]
fn test_search_title_matches_fill_limit() {
    let (dir, cache, _internals, pubsub) = redis_store();

    let json = run_json(&dir, &["search", "redis", "--limit", "2"]);

    let mut ids = result_ids(&json);
    ids.sort();
    let mut expected = vec![cache, pubsub];
    expected.sort();
    assert_eq!(ids, expected);
}

#[test]
fn test_search_title_matches_before_body_matches() {
    let (dir, _cache, internals, _pubsub) = redis_store();

    let json = run_json(&dir, &["search", "redis"]);

    let ids = result_ids(&json);
    assert_eq!(ids.len(), 3);
    assert_eq!(ids[2], internals);
}

#[test]
fn test_search_body_only_match() {
    let dir = setup_store();
    let id = create_post(&dir, "a", "redis deep dive");

    let json = run_json(&dir, &["search", "redis", "-n", "5"]);

    assert_eq!(result_ids(&json), vec![id]);
    assert_eq!(json[0]["title"], "a");
    assert_eq!(json[0]["body"], "redis deep dive");
}

#[test]
fn test_search_post_matching_title_and_body_listed_once() {
    let dir = setup_store();
    let both = create_post(&dir, "Redis cache", "all about redis");
    let body = create_post(&dir, "other", "redis again");

    let json = run_json(&dir, &["search", "redis"]);

    assert_eq!(result_ids(&json), vec![both, body]);
}

#[test]
fn test_search_human_output() {
    let (dir, cache, _internals, _pubsub) = redis_store();

    let stdout = run_and_get_stdout(&dir, &["search", "redis", "--limit", "3"]);

    assert!(stdout.contains(&cache));
    assert!(stdout.contains("Redis cache"));
    assert!(stdout.contains("    redis internals"));
}

#[test]
fn test_search_no_match() {
    let (dir, ..) = redis_store();

    let json = run_json(&dir, &["search", "postgres"]);

    assert_eq!(json, serde_json::json!([]));
}

#[test]
fn test_search_non_positive_limit_is_usage_error() {
    let (dir, ..) = redis_store();

    for limit in ["0", "-1"] {
        inkpost()
            .current_dir(dir.path())
            .args(["search", "redis", "--limit", limit])
            .assert()
            .code(2)
            .stderr(predicate::str::contains("invalid search argument"));
    }
}

#[test]
fn test_search_limit_above_max_is_usage_error() {
    let (dir, ..) = redis_store();

    inkpost()
        .current_dir(dir.path())
        .args(["search", "redis", "--limit", "1000"])
        .assert()
        .code(2);
}

#[test]
fn test_search_blank_term_is_usage_error() {
    let (dir, ..) = redis_store();

    let output = inkpost()
        .current_dir(dir.path())
        .args(["--format", "json", "search", "   "])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(2));
    let json: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(json["error"]["type"], "invalid_argument");
}

#[test]
fn test_search_punctuation_is_literal() {
    let dir = setup_store();
    let id = create_post(&dir, "C++ tips", "templates");

    let json = run_json(&dir, &["search", "c++ \"tips"]);

    assert_eq!(result_ids(&json), vec![id]);
}

#[test]
fn test_search_is_repeatable() {
    let (dir, ..) = redis_store();

    let first = run_json(&dir, &["search", "redis", "--limit", "2"]);
    let second = run_json(&dir, &["search", "redis", "--limit", "2"]);

    assert_eq!(first, second);
}

#[test]
fn test_search_unavailable_index_fails_without_partial_output() {
    let (dir, ..) = redis_store();
    let conn = rusqlite::Connection::open(dir.path().join(".inkpost/inkpost.db")).unwrap();
    // A plain table under the index name survives reopening but cannot MATCH
    conn.execute_batch("DROP TABLE posts_fts; CREATE TABLE posts_fts (title TEXT, body TEXT);")
        .unwrap();
    drop(conn);

    let output = inkpost()
        .current_dir(dir.path())
        .args(["--format", "json", "search", "redis"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let json: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(json["error"]["type"], "index_unavailable");
    assert!(json["error"]["message"]
        .as_str()
        .unwrap()
        .contains("search_title"));
}
