//! Error handling.
//!
//! Two error kinds exist at the domain level:
//! - [`ValidationError`]: invalid URL input, surfaced inline and blocking
//!   submission
//! - [`AnalysisError`]: an in-flight analysis failed, driving the record to
//!   its `Error` state
//!
//! [`InitializationError`] covers startup failures (logger setup).

mod types;

// Re-export public API
pub use types::{AnalysisError, InitializationError, ValidationError};
