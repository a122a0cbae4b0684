use crate::cli::support::{inkpost, setup_store};
use predicates::prelude::*;

// ============================================================================
// Logging flag tests
// ============================================================================

#[test]
fn test_log_level_debug_shows_debug_messages() {
    let dir = setup_store();

    inkpost()
        .current_dir(dir.path())
        .env_remove("INKPOST_LOG")
        .env_remove("RUST_LOG")
        .args(["--log-level", "debug", "post", "list"])
        .assert()
        .success()
        .stderr(predicate::str::contains("parse_args"));
}

#[test]
fn test_default_level_hides_debug_messages() {
    let dir = setup_store();

    inkpost()
        .current_dir(dir.path())
        .env_remove("INKPOST_LOG")
        .env_remove("RUST_LOG")
        .args(["post", "list"])
        .assert()
        .success()
        .stderr(predicate::str::contains("parse_args").not());
}

#[test]
fn test_verbose_shows_search_timing() {
    let dir = setup_store();

    inkpost()
        .current_dir(dir.path())
        .env_remove("INKPOST_LOG")
        .env_remove("RUST_LOG")
        .args(["--verbose", "search", "anything"])
        .assert()
        .success()
        .stderr(predicate::str::contains("search_params"));
}

#[test]
fn test_log_json_emits_json_lines() {
    let dir = setup_store();

    inkpost()
        .current_dir(dir.path())
        .env_remove("INKPOST_LOG")
        .env_remove("RUST_LOG")
        .args(["--log-json", "--log-level", "debug", "post", "list"])
        .assert()
        .success()
        .stderr(predicate::str::contains("\"level\":\"DEBUG\""));
}

#[test]
fn test_env_filter_overrides_flag() {
    let dir = setup_store();

    inkpost()
        .current_dir(dir.path())
        .env("INKPOST_LOG", "off")
        .args(["--log-level", "debug", "post", "list"])
        .assert()
        .success()
        .stderr(predicate::str::contains("parse_args").not());
}

#[test]
fn test_create_post_logged_once() {
    let dir = setup_store();

    let output = inkpost()
        .current_dir(dir.path())
        .env_remove("INKPOST_LOG")
        .env_remove("RUST_LOG")
        .args([
            "--verbose", "post", "create", "--title", "Logged", "--body", "once",
        ])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(stderr.matches("create_post").count(), 1);
}
