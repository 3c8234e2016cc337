//! Error type definitions.

use std::time::Duration;

use log::SetLoggerError;
use thiserror::Error;

use crate::config::MAX_URL_LENGTH;

/// Error types for initialization failures.
#[derive(Error, Debug)]
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

/// Rejection reasons produced by the URL validator.
///
/// Surfaced inline next to the input; a rejected submission never reaches
/// the analysis session.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Empty input.
    #[error("URL required")]
    UrlRequired,

    /// Input does not match the URL pattern.
    #[error("please enter a valid URL")]
    InvalidUrl,

    /// Input exceeds the maximum accepted URL length.
    #[error("URL exceeds maximum length ({0} > {MAX_URL_LENGTH})")]
    TooLong(usize),
}

/// Failure of an in-flight analysis.
///
/// Reaching this error transitions the analysis record to `Error` with no
/// result payload attached.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    /// The analysis did not finish within the configured deadline.
    #[error("analysis timed out after {}s", .0.as_secs())]
    Timeout(Duration),

    /// The analyzer backend reported a failure.
    #[error("analysis failed: {0}")]
    Backend(String),
}
