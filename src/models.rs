//! Core data model for analysis requests, records and results.
//!
//! The result payload mirrors the wire shape consumed by the results card
//! (camelCase field names), so it serializes as-is with `--json`.

use serde::{Deserialize, Serialize};
use strum_macros::{Display as DisplayMacro, EnumIter as EnumIterMacro};

/// A validated analysis submission.
///
/// Can only be constructed by [`crate::validation::validate_url`]; invalid
/// input never produces an `AnalysisRequest`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisRequest {
    url: String,
}

impl AnalysisRequest {
    /// Creates a request from an already-validated URL string.
    pub(crate) fn new(url: String) -> Self {
        AnalysisRequest { url }
    }

    /// The validated URL string.
    pub fn url(&self) -> &str {
        &self.url
    }
}

/// Lifecycle state of an analysis.
///
/// `Pending` is part of the status contract but is never produced by the
/// session: a record is created directly in `Analyzing`. `Complete` and
/// `Error` are terminal.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, DisplayMacro, EnumIterMacro,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum AnalysisStatus {
    /// Accepted but not yet started.
    Pending,
    /// Analysis in flight.
    Analyzing,
    /// Analysis finished with results attached.
    Complete,
    /// Analysis failed; no results.
    Error,
}

impl AnalysisStatus {
    /// Whether this status is terminal (`Complete` or `Error`).
    pub fn is_terminal(self) -> bool {
        matches!(self, AnalysisStatus::Complete | AnalysisStatus::Error)
    }
}

/// The unit of lifecycle state: one live record per submission.
///
/// A new submission replaces any prior record wholesale, no merging. The
/// `generation` identifies the record so a superseded analysis's late
/// completion can be recognized and discarded.
///
/// Invariant: `results.is_some()` if and only if `status == Complete`.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisRecord {
    /// Echo of the submitted URL, immutable once created.
    pub url: String,
    /// Current lifecycle status.
    pub status: AnalysisStatus,
    /// Result payload, present only when `status == Complete`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub results: Option<AnalysisResult>,
    /// Failure message, present only when `status == Error`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Identity of this record within its session.
    #[serde(skip)]
    pub generation: u64,
}

impl AnalysisRecord {
    /// Creates a fresh record in `Analyzing` state.
    pub fn new(url: String, generation: u64) -> Self {
        AnalysisRecord {
            url,
            status: AnalysisStatus::Analyzing,
            results: None,
            error: None,
            generation,
        }
    }

    /// Transitions the record to `Complete` and attaches the result payload.
    pub(crate) fn complete(&mut self, results: AnalysisResult) {
        self.status = AnalysisStatus::Complete;
        self.results = Some(results);
        self.error = None;
    }

    /// Transitions the record to `Error` with no results.
    pub(crate) fn fail(&mut self, message: String) {
        self.status = AnalysisStatus::Error;
        self.results = None;
        self.error = Some(message);
    }
}

/// Structured analysis result, opaque to the session and consumed only for
/// display.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnalysisResult {
    /// Page-load performance score and Core Web Vitals.
    pub performance: PerformanceReport,
    /// SEO score and issue list.
    pub seo: SeoReport,
    /// Transport security status.
    pub security: SecurityReport,
}

/// Performance score plus the underlying timing metrics.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PerformanceReport {
    /// Overall performance score, 0-100.
    pub score: u8,
    /// Core Web Vitals measurements.
    pub metrics: CoreWebVitals,
}

/// Core Web Vitals page metrics.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CoreWebVitals {
    /// Largest Contentful Paint, seconds.
    pub lcp: f64,
    /// First Input Delay, milliseconds.
    pub fid: f64,
    /// Cumulative Layout Shift, unitless ratio.
    pub cls: f64,
}

/// SEO score and the ordered list of detected issues.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SeoReport {
    /// Overall SEO score, 0-100.
    pub score: u8,
    /// Detected issues, in detection order.
    pub issues: Vec<SeoIssue>,
}

/// A single SEO finding.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SeoIssue {
    /// Issue category (e.g. `meta`, `heading`).
    #[serde(rename = "type")]
    pub issue_type: String,
    /// How serious the issue is.
    pub severity: IssueSeverity,
    /// Human-readable description.
    pub message: String,
}

/// Severity of an SEO issue.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, DisplayMacro, EnumIterMacro,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum IssueSeverity {
    /// Must fix.
    High,
    /// Should fix.
    Medium,
    /// Nice to fix.
    Low,
}

/// HTTPS and certificate status for the analyzed site.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SecurityReport {
    /// Whether the site is served over HTTPS.
    pub https: bool,
    /// Certificate validity details.
    pub ssl_certificate: CertificateStatus,
}

/// Validity window of the site's TLS certificate.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CertificateStatus {
    /// Whether the certificate chain validated.
    pub valid: bool,
    /// Expiry date (ISO 8601 date), when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiry_date: Option<String>,
}
