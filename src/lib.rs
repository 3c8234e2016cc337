//! site_audit library: URL validation and single-flight site analysis
//!
//! This library provides a validation gate for URL submissions and an
//! asynchronous analysis lifecycle that drives each accepted submission
//! through `analyzing -> complete | error`, producing a structured result
//! (performance, SEO, security) for display. The analysis backend sits
//! behind the [`analyzer::Analyzer`] trait; the shipped backend simulates a
//! measurement pipeline with a fixed delay and payload.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! use site_audit::analyzer::{Analyzer, SimulatedAnalyzer};
//! use site_audit::lifecycle::AnalysisSession;
//! use site_audit::validation::validate_url;
//!
//! # #[tokio::main]
//! # async fn main() {
//! let analyzer: Arc<dyn Analyzer> = Arc::new(SimulatedAnalyzer::default());
//! let session = AnalysisSession::new(analyzer, Duration::from_secs(30));
//!
//! let request = validate_url("https://example.se").expect("valid URL");
//! session.start(request).await.finished().await;
//!
//! let record = session.current().await.expect("record exists");
//! println!("{}", site_audit::report::render_card(&record));
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your
//! application or ensure you're calling library functions within an async
//! context.

#![warn(missing_docs)]

pub mod analyzer;
mod app;
pub mod config;
pub mod error_handling;
pub mod initialization;
pub mod lifecycle;
mod models;
pub mod report;
pub mod validation;

// Re-export public API
pub use app::{run_session, SessionSummary};
pub use config::{Config, LogFormat, LogLevel};
pub use models::{
    AnalysisRecord, AnalysisRequest, AnalysisResult, AnalysisStatus, CertificateStatus,
    CoreWebVitals, IssueSeverity, PerformanceReport, SeoIssue, SeoReport, SecurityReport,
};
