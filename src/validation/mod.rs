//! URL submission validation.
//!
//! Pure gate in front of the analysis session: given a raw string it either
//! produces a validated [`AnalysisRequest`] or a [`ValidationError`] with a
//! user-facing message. No side effects, nothing asynchronous.

use std::sync::LazyLock;

use regex::Regex;

use crate::config::MAX_URL_LENGTH;
use crate::error_handling::ValidationError;
use crate::models::AnalysisRequest;

/// URL shape accepted for analysis: optional http/https scheme, dot-separated
/// hostname labels with a 2-to-6 character top-level label, optional path.
static URL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(https?://)?([\da-z.-]+)\.([a-z.]{2,6})([/\w .-]*)*/?$")
        .expect("URL pattern is a valid regex")
});

/// Validates a raw URL submission.
///
/// Rejects empty input, input longer than [`MAX_URL_LENGTH`], and input not
/// matching the accepted URL shape. Invalid input never produces an
/// [`AnalysisRequest`].
///
/// # Arguments
///
/// * `raw` - The submitted URL string
///
/// # Returns
///
/// A validated request, or the rejection reason to surface next to the input.
pub fn validate_url(raw: &str) -> Result<AnalysisRequest, ValidationError> {
    if raw.is_empty() {
        return Err(ValidationError::UrlRequired);
    }

    if raw.len() > MAX_URL_LENGTH {
        return Err(ValidationError::TooLong(raw.len()));
    }

    if !URL_PATTERN.is_match(raw) {
        return Err(ValidationError::InvalidUrl);
    }

    Ok(AnalysisRequest::new(raw.to_owned()))
}
