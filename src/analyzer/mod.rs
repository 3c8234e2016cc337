//! Analysis backends.
//!
//! The session drives analyses through the [`Analyzer`] capability trait so a
//! real measurement pipeline can be substituted without touching the
//! lifecycle controller. The shipped backend is [`SimulatedAnalyzer`], which
//! reproduces the original widget's behavior: a fixed delay followed by a
//! fixed payload.

mod simulated;

pub use simulated::{sample_result, SimulatedAnalyzer};

use futures::future::BoxFuture;

use crate::error_handling::AnalysisError;
use crate::models::AnalysisResult;

/// A backend capable of producing an [`AnalysisResult`] for a URL.
///
/// Implementations are expected to be cheap to share (`Arc<dyn Analyzer>`)
/// and safe to call concurrently; the session enforces its own single-flight
/// discipline on top.
pub trait Analyzer: Send + Sync {
    /// Analyzes the given URL.
    ///
    /// The session wraps this call in its own deadline, so implementations
    /// do not need to enforce a timeout themselves.
    fn analyze<'a>(&'a self, url: &'a str) -> BoxFuture<'a, Result<AnalysisResult, AnalysisError>>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, Instant};

    #[tokio::test]
    async fn test_simulated_analyzer_returns_fixture_payload() {
        let analyzer = SimulatedAnalyzer::new(Duration::from_millis(10));
        let result = analyzer
            .analyze("https://example.se")
            .await
            .expect("simulated analysis should succeed");

        assert_eq!(result.performance.score, 85);
        assert_eq!(result.seo.score, 92);
        assert!(result.security.https);
    }

    #[tokio::test]
    async fn test_simulated_analyzer_waits_for_configured_delay() {
        let delay = Duration::from_millis(50);
        let analyzer = SimulatedAnalyzer::new(delay);

        let started = Instant::now();
        analyzer
            .analyze("https://example.com")
            .await
            .expect("simulated analysis should succeed");
        assert!(started.elapsed() >= delay);
    }
}
