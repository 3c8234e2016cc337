//! Score and severity band mapping.

use colored::{ColoredString, Colorize};
use strum_macros::Display as DisplayMacro;

use crate::config::{SCORE_GOOD_THRESHOLD, SCORE_WARNING_THRESHOLD};
use crate::models::IssueSeverity;

/// Display band derived from a numeric score or an issue severity.
///
/// Ordered from best to worst, so bands can be compared directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, DisplayMacro)]
#[strum(serialize_all = "lowercase")]
pub enum SeverityBand {
    /// Score >= 90, or a low-severity issue.
    Good,
    /// 50 <= score < 90, or a medium-severity issue.
    Warning,
    /// Score < 50, or a high-severity issue.
    Critical,
}

impl SeverityBand {
    /// Maps a 0-100 score to its display band.
    pub fn from_score(score: u8) -> Self {
        if score >= SCORE_GOOD_THRESHOLD {
            SeverityBand::Good
        } else if score >= SCORE_WARNING_THRESHOLD {
            SeverityBand::Warning
        } else {
            SeverityBand::Critical
        }
    }

    /// Colors a display string according to the band.
    pub fn paint(self, text: &str) -> ColoredString {
        match self {
            SeverityBand::Good => text.green(),
            SeverityBand::Warning => text.yellow(),
            SeverityBand::Critical => text.red(),
        }
    }
}

impl From<IssueSeverity> for SeverityBand {
    /// Iconography mapping: issue severities reuse the score bands directly.
    fn from(severity: IssueSeverity) -> Self {
        match severity {
            IssueSeverity::High => SeverityBand::Critical,
            IssueSeverity::Medium => SeverityBand::Warning,
            IssueSeverity::Low => SeverityBand::Good,
        }
    }
}
