//! Integration tests for the analysis lifecycle.
//!
//! Covers the lifecycle contracts: synchronous transition to `analyzing`,
//! the stale-completion guard when a new submission supersedes an in-flight
//! analysis, the results-iff-complete invariant, and the explicit timeout.

use std::sync::Arc;
use std::time::Duration;

use futures::future::BoxFuture;

use site_audit::analyzer::{Analyzer, SimulatedAnalyzer};
use site_audit::error_handling::AnalysisError;
use site_audit::lifecycle::AnalysisSession;
use site_audit::validation::validate_url;
use site_audit::{AnalysisResult, AnalysisStatus};

/// Backend that always fails, for driving the record into its error state.
struct FailingAnalyzer;

impl Analyzer for FailingAnalyzer {
    fn analyze<'a>(&'a self, _url: &'a str) -> BoxFuture<'a, Result<AnalysisResult, AnalysisError>> {
        Box::pin(async { Err(AnalysisError::Backend("measurement pipeline unavailable".into())) })
    }
}

fn simulated_session(delay_ms: u64) -> AnalysisSession {
    AnalysisSession::new(
        Arc::new(SimulatedAnalyzer::new(Duration::from_millis(delay_ms))),
        Duration::from_secs(5),
    )
}

#[tokio::test]
async fn test_start_is_synchronous() {
    let session = simulated_session(100);
    let handle = session
        .start(validate_url("https://example.com").expect("valid URL"))
        .await;

    // Before any completion the record is already installed and analyzing.
    let record = session.current().await.expect("record should exist");
    assert_eq!(record.status, AnalysisStatus::Analyzing);
    assert!(record.results.is_none());

    handle.finished().await;
}

#[tokio::test]
async fn test_results_present_iff_complete() {
    let session = simulated_session(10);

    // Analyzing: no results.
    let handle = session
        .start(validate_url("https://example.com").expect("valid URL"))
        .await;
    assert!(session
        .current()
        .await
        .expect("record should exist")
        .results
        .is_none());
    handle.finished().await;

    // Complete: results attached.
    let record = session.current().await.expect("record should exist");
    assert_eq!(record.status, AnalysisStatus::Complete);
    assert!(record.results.is_some());

    // Error: no results.
    let failing = AnalysisSession::new(Arc::new(FailingAnalyzer), Duration::from_secs(5));
    failing
        .start(validate_url("https://example.com").expect("valid URL"))
        .await
        .finished()
        .await;
    let record = failing.current().await.expect("record should exist");
    assert_eq!(record.status, AnalysisStatus::Error);
    assert!(record.results.is_none());
}

#[tokio::test]
async fn test_superseding_submission_wins() {
    let session = simulated_session(30);

    let first = session
        .start(validate_url("https://first.example.com").expect("valid URL"))
        .await;
    let second = session
        .start(validate_url("https://second.example.com").expect("valid URL"))
        .await;

    // The in-flight record already belongs to the second submission.
    let record = session.current().await.expect("record should exist");
    assert_eq!(record.url, "https://second.example.com");

    first.finished().await;
    second.finished().await;

    // The first submission's completion fired but may not mutate the record
    // created by the second.
    let record = session.current().await.expect("record should exist");
    assert_eq!(record.url, "https://second.example.com");
    assert_eq!(record.status, AnalysisStatus::Complete);
}

#[tokio::test]
async fn test_rapid_resubmission_only_latest_record_survives() {
    let session = simulated_session(10);

    let mut handles = Vec::new();
    for n in 1..=5 {
        let url = format!("https://site{n}.example.com");
        handles.push(session.start(validate_url(&url).expect("valid URL")).await);
    }
    for handle in handles {
        handle.finished().await;
    }

    let record = session.current().await.expect("record should exist");
    assert_eq!(record.url, "https://site5.example.com");
    assert_eq!(record.status, AnalysisStatus::Complete);
    assert!(record.results.is_some());
}

#[tokio::test]
async fn test_backend_failure_reaches_error_state() {
    let session = AnalysisSession::new(Arc::new(FailingAnalyzer), Duration::from_secs(5));
    session
        .start(validate_url("https://example.com").expect("valid URL"))
        .await
        .finished()
        .await;

    let record = session.current().await.expect("record should exist");
    assert_eq!(record.status, AnalysisStatus::Error);
    assert!(record.results.is_none());
    assert_eq!(
        record.error.as_deref(),
        Some("analysis failed: measurement pipeline unavailable")
    );
}

#[tokio::test]
async fn test_slow_backend_times_out() {
    let session = AnalysisSession::new(
        Arc::new(SimulatedAnalyzer::new(Duration::from_secs(10))),
        Duration::from_millis(20),
    );
    session
        .start(validate_url("https://example.com").expect("valid URL"))
        .await
        .finished()
        .await;

    let record = session.current().await.expect("record should exist");
    assert_eq!(record.status, AnalysisStatus::Error);
    assert!(record.results.is_none());
    assert!(record
        .error
        .as_deref()
        .expect("error message should be set")
        .contains("timed out"));
}
