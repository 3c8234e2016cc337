//! Simulated analysis backend.

use std::time::Duration;

use futures::future::BoxFuture;
use log::debug;

use crate::config::DEFAULT_ANALYSIS_DELAY_MS;
use crate::error_handling::AnalysisError;
use crate::models::{
    AnalysisResult, CertificateStatus, CoreWebVitals, IssueSeverity, PerformanceReport, SeoIssue,
    SeoReport, SecurityReport,
};

use super::Analyzer;

/// Stand-in for a real measurement pipeline: sleeps a fixed delay, then
/// returns a fixed payload.
///
/// The delay is configurable so tests can run fast; the payload is the
/// original widget's canned result (see [`sample_result`]).
pub struct SimulatedAnalyzer {
    delay: Duration,
}

impl SimulatedAnalyzer {
    /// Creates a simulated analyzer with the given completion delay.
    pub fn new(delay: Duration) -> Self {
        SimulatedAnalyzer { delay }
    }
}

impl Default for SimulatedAnalyzer {
    fn default() -> Self {
        SimulatedAnalyzer::new(Duration::from_millis(DEFAULT_ANALYSIS_DELAY_MS))
    }
}

impl Analyzer for SimulatedAnalyzer {
    fn analyze<'a>(&'a self, url: &'a str) -> BoxFuture<'a, Result<AnalysisResult, AnalysisError>> {
        Box::pin(async move {
            debug!("simulating analysis of {url} ({:?} delay)", self.delay);
            tokio::time::sleep(self.delay).await;
            Ok(sample_result())
        })
    }
}

/// The canned analysis payload produced by the simulated backend.
///
/// Values match the original widget's mock data: performance 85 with
/// LCP 2.5s / FID 100ms / CLS 0.1, SEO 92 with two minor issues, HTTPS on
/// with a valid certificate.
pub fn sample_result() -> AnalysisResult {
    AnalysisResult {
        performance: PerformanceReport {
            score: 85,
            metrics: CoreWebVitals {
                lcp: 2.5,
                fid: 100.0,
                cls: 0.1,
            },
        },
        seo: SeoReport {
            score: 92,
            issues: vec![
                SeoIssue {
                    issue_type: "meta".into(),
                    severity: IssueSeverity::Medium,
                    message: "Meta description could be more descriptive".into(),
                },
                SeoIssue {
                    issue_type: "heading".into(),
                    severity: IssueSeverity::Low,
                    message: "Consider adding more heading structure".into(),
                },
            ],
        },
        security: SecurityReport {
            https: true,
            ssl_certificate: CertificateStatus {
                valid: true,
                expiry_date: Some("2024-12-31".into()),
            },
        },
    }
}
