//! Integration tests for the one-shot session surface.

use site_audit::{run_session, Config};

#[tokio::test]
async fn test_one_shot_session_counts_outcomes() {
    let config = Config {
        urls: vec![
            "https://example.se".into(),
            "not a url".into(),
            "example.co".into(),
        ],
        delay_ms: 10,
        timeout_seconds: 5,
        ..Config::default()
    };

    let summary = run_session(config).await.expect("session should run");
    assert_eq!(summary.submitted, 2);
    assert_eq!(summary.completed, 2);
    assert_eq!(summary.failed, 0);
    assert_eq!(summary.rejected, 1);
    assert!(summary.elapsed_seconds >= 0.0);
}

#[tokio::test]
async fn test_json_mode_session_runs() {
    let config = Config {
        urls: vec!["https://example.se".into()],
        delay_ms: 10,
        timeout_seconds: 5,
        json: true,
        ..Config::default()
    };

    let summary = run_session(config).await.expect("session should run");
    assert_eq!(summary.submitted, 1);
    assert_eq!(summary.completed, 1);
}

#[tokio::test]
async fn test_empty_submission_list_is_not_an_error() {
    // No URLs and nothing on stdin reads as an empty interactive session
    // when stdin is closed; with explicit empty-but-whitespace input the
    // validator is never reached. Here we only exercise the argument path.
    let config = Config {
        urls: vec!["   ".into()],
        delay_ms: 10,
        timeout_seconds: 5,
        ..Config::default()
    };

    let summary = run_session(config).await.expect("session should run");
    // Whitespace trims to empty input, which the validator rejects with the
    // "URL required" message.
    assert_eq!(summary.rejected, 1);
    assert_eq!(summary.submitted, 0);
}
