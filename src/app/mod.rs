//! Session loop: the user-facing submission surface.
//!
//! Accepts URL submissions (CLI arguments or interactive stdin lines),
//! funnels them through the validation gate into the analysis session, and
//! renders each outcome. Only one analysis is in flight at a time: the loop
//! awaits completion before reading the next submission, which is the
//! "resubmission disabled while analyzing" behavior of the original form.

use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use colored::Colorize;
use log::info;
use tokio::io::{stdin, AsyncBufReadExt, BufReader};

use crate::analyzer::{Analyzer, SimulatedAnalyzer};
use crate::config::Config;
use crate::lifecycle::AnalysisSession;
use crate::models::AnalysisStatus;
use crate::report::{render_card, render_json};
use crate::validation::validate_url;

/// Results of a finished analysis session.
#[derive(Debug, Clone)]
pub struct SessionSummary {
    /// Number of submissions accepted by the validator.
    pub submitted: usize,
    /// Number of analyses that reached `Complete`.
    pub completed: usize,
    /// Number of analyses that reached `Error`.
    pub failed: usize,
    /// Number of submissions rejected by the validator.
    pub rejected: usize,
    /// Elapsed time in seconds.
    pub elapsed_seconds: f64,
}

/// Runs an analysis session with the provided configuration.
///
/// URLs given on the command line are analyzed in order; with no URLs,
/// submissions are read line by line from stdin. Each submission is
/// validated, analyzed to completion and rendered before the next one is
/// read.
///
/// # Errors
///
/// Returns an error if result serialization fails in `--json` mode. I/O
/// problems on stdin end the session normally.
pub async fn run_session(config: Config) -> Result<SessionSummary> {
    let analyzer: Arc<dyn Analyzer> =
        Arc::new(SimulatedAnalyzer::new(Duration::from_millis(config.delay_ms)));
    let session = AnalysisSession::new(analyzer, Duration::from_secs(config.timeout_seconds));

    let start_time = Instant::now();
    let mut summary = SessionSummary {
        submitted: 0,
        completed: 0,
        failed: 0,
        rejected: 0,
        elapsed_seconds: 0.0,
    };

    if config.urls.is_empty() {
        info!("Reading URL submissions from stdin");
        let mut lines = BufReader::new(stdin()).lines();
        while let Ok(Some(line)) = lines.next_line().await {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            submit(&session, trimmed, config.json, &mut summary).await?;
        }
    } else {
        for raw in &config.urls {
            submit(&session, raw.trim(), config.json, &mut summary).await?;
        }
    }

    summary.elapsed_seconds = start_time.elapsed().as_secs_f64();
    Ok(summary)
}

/// Validates one submission and, if accepted, runs it to completion and
/// renders the outcome.
async fn submit(
    session: &AnalysisSession,
    raw: &str,
    json: bool,
    summary: &mut SessionSummary,
) -> Result<()> {
    let request = match validate_url(raw) {
        Ok(request) => request,
        Err(err) => {
            // Inline message next to the input; the submission never reaches
            // the session.
            println!("{}", err.to_string().red());
            summary.rejected += 1;
            return Ok(());
        }
    };

    summary.submitted += 1;
    let handle = session.start(request).await;
    handle.finished().await;

    let Some(record) = session.current().await else {
        // start() always installs a record; nothing to render if a caller
        // raced a fresh session, so just move on.
        return Ok(());
    };

    match record.status {
        AnalysisStatus::Complete => summary.completed += 1,
        AnalysisStatus::Error => summary.failed += 1,
        _ => {}
    }

    if json {
        let rendered = render_json(&record).context("Failed to serialize analysis record")?;
        println!("{rendered}");
    } else {
        println!("{}", render_card(&record));
    }

    Ok(())
}
