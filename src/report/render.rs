//! Results card rendering.
//!
//! A pure, stateless projection of an [`AnalysisRecord`] to display text.
//! Nothing here mutates the record or talks to the session.

use std::fmt::Write;

use colored::Colorize;

use crate::models::{AnalysisRecord, AnalysisResult, AnalysisStatus};

use super::band::SeverityBand;

/// Renders the record in its current state as a display card.
///
/// `Analyzing` renders a progress line, `Complete` the full results card,
/// and `Error` a visible failure line. `Pending` is part of the status
/// contract but is never produced by the session.
pub fn render_card(record: &AnalysisRecord) -> String {
    match record.status {
        AnalysisStatus::Pending => format!("Analysis of {} is pending", record.url),
        AnalysisStatus::Analyzing => format!("Analyzing {}...", record.url),
        AnalysisStatus::Complete => match &record.results {
            Some(results) => render_results(&record.url, results),
            // Unreachable while the record invariant holds; degrade rather
            // than panic if it ever doesn't.
            None => format!("Analysis of {} complete (no results)", record.url),
        },
        AnalysisStatus::Error => {
            let message = record.error.as_deref().unwrap_or("analysis failed");
            format!(
                "{} {}: {}",
                "Analysis failed for".red(),
                record.url,
                message.red()
            )
        }
    }
}

/// Serializes the record as pretty-printed JSON (camelCase wire shape).
pub fn render_json(record: &AnalysisRecord) -> serde_json::Result<String> {
    serde_json::to_string_pretty(record)
}

fn render_results(url: &str, results: &AnalysisResult) -> String {
    let mut card = String::new();

    let _ = writeln!(card, "Analysis results for {}", url.bold());

    let perf_band = SeverityBand::from_score(results.performance.score);
    let _ = writeln!(
        card,
        "  Performance  {}",
        perf_band.paint(&results.performance.score.to_string()).bold()
    );
    let metrics = &results.performance.metrics;
    let _ = writeln!(card, "    Largest Contentful Paint   {}s", metrics.lcp);
    let _ = writeln!(card, "    First Input Delay          {}ms", metrics.fid);
    let _ = writeln!(card, "    Cumulative Layout Shift    {}", metrics.cls);

    let seo_band = SeverityBand::from_score(results.seo.score);
    let _ = writeln!(
        card,
        "  SEO          {}",
        seo_band.paint(&results.seo.score.to_string()).bold()
    );
    for issue in &results.seo.issues {
        let band = SeverityBand::from(issue.severity);
        let _ = writeln!(
            card,
            "    {} {}",
            band.paint(&format!("[{}]", issue.severity)),
            issue.message
        );
    }

    let _ = writeln!(card, "  Security");
    let https = if results.security.https {
        "enabled".green()
    } else {
        "not enabled".red()
    };
    let _ = writeln!(card, "    HTTPS            {https}");
    let certificate = &results.security.ssl_certificate;
    let validity = if certificate.valid {
        "valid".green()
    } else {
        "invalid".red()
    };
    match &certificate.expiry_date {
        Some(expiry) => {
            let _ = writeln!(card, "    SSL certificate  {validity} (expires {expiry})");
        }
        None => {
            let _ = writeln!(card, "    SSL certificate  {validity}");
        }
    }

    card
}
