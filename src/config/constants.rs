//! Configuration constants.

/// Maximum URL length (2048 characters) to prevent DoS via extremely long
/// input. This matches common browser and server limits.
pub const MAX_URL_LENGTH: usize = 2048;

/// Default simulated analysis duration in milliseconds.
///
/// The shipped analyzer backend sleeps this long before producing its
/// payload, matching the fixed delay of the original widget.
pub const DEFAULT_ANALYSIS_DELAY_MS: u64 = 2000;

/// Default per-analysis deadline in seconds.
///
/// An analysis that has not completed within this window is driven to its
/// `Error` state. Generous relative to the simulated delay so only a genuinely
/// stuck backend trips it.
pub const DEFAULT_ANALYSIS_TIMEOUT_SECS: u64 = 30;

/// Scores at or above this threshold display as "good".
pub const SCORE_GOOD_THRESHOLD: u8 = 90;

/// Scores at or above this threshold (and below the "good" threshold)
/// display as "warning"; anything lower displays as "critical".
pub const SCORE_WARNING_THRESHOLD: u8 = 50;
