//! Analysis lifecycle controller.
//!
//! [`AnalysisSession`] owns the single current [`AnalysisRecord`] and drives
//! it through `analyzing -> complete | error`. Each `start` replaces the
//! prior record wholesale and bumps a monotonically increasing generation
//! counter; a completion is applied only if its generation still matches the
//! current record, so a superseded analysis can never overwrite a newer one.
//!
//! There are no retries and no cancellation of in-flight work: a superseded
//! task runs to completion and has its result discarded at apply time.

use std::sync::Arc;
use std::time::Duration;

use log::{debug, info, warn};
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio::time::timeout;

use crate::analyzer::Analyzer;
use crate::error_handling::AnalysisError;
use crate::models::{AnalysisRecord, AnalysisRequest, AnalysisResult};

/// Owns the current analysis record and schedules completions.
///
/// The session is the only mutation path for the record. Cloning snapshots
/// out via [`AnalysisSession::current`] is the read path.
pub struct AnalysisSession {
    analyzer: Arc<dyn Analyzer>,
    analysis_timeout: Duration,
    state: Arc<Mutex<SessionState>>,
}

#[derive(Default)]
struct SessionState {
    record: Option<AnalysisRecord>,
    generation: u64,
}

impl SessionState {
    /// Applies a completion outcome to the current record.
    ///
    /// Returns `false` (leaving the record untouched) when the completion
    /// belongs to a superseded generation.
    fn apply(&mut self, generation: u64, outcome: Result<AnalysisResult, AnalysisError>) -> bool {
        if generation != self.generation {
            return false;
        }
        let Some(record) = self.record.as_mut() else {
            return false;
        };
        match outcome {
            Ok(results) => record.complete(results),
            Err(err) => record.fail(err.to_string()),
        }
        true
    }
}

/// Handle to one started analysis.
///
/// Holds the spawned completion task; awaiting [`AnalysisHandle::finished`]
/// waits for the completion to be applied (or discarded, if superseded).
pub struct AnalysisHandle {
    generation: u64,
    task: JoinHandle<()>,
}

impl AnalysisHandle {
    /// The generation of the record this analysis was started for.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Waits until the analysis task has run to completion.
    pub async fn finished(self) {
        if let Err(e) = self.task.await {
            warn!("Analysis task panicked: {e:?}");
        }
    }
}

impl AnalysisSession {
    /// Creates a session around the given analyzer backend.
    ///
    /// `analysis_timeout` is the explicit per-analysis deadline; exceeding it
    /// drives the record to `Error`.
    pub fn new(analyzer: Arc<dyn Analyzer>, analysis_timeout: Duration) -> Self {
        AnalysisSession {
            analyzer,
            analysis_timeout,
            state: Arc::new(Mutex::new(SessionState::default())),
        }
    }

    /// Starts an analysis for a validated request.
    ///
    /// Synchronously installs a fresh record in `Analyzing` state (replacing
    /// any prior record, regardless of its state) before the completion task
    /// is spawned: when this method returns, `current()` already reflects the
    /// new analysis.
    pub async fn start(&self, request: AnalysisRequest) -> AnalysisHandle {
        let (generation, url) = {
            let mut state = self.state.lock().await;
            state.generation += 1;
            let generation = state.generation;
            if let Some(prior) = &state.record {
                debug!(
                    "Replacing analysis #{} ({}, {})",
                    prior.generation, prior.url, prior.status
                );
            }
            let url = request.url().to_owned();
            state.record = Some(AnalysisRecord::new(url.clone(), generation));
            (generation, url)
        };

        info!("Analyzing {url} (analysis #{generation})");

        let analyzer = Arc::clone(&self.analyzer);
        let state = Arc::clone(&self.state);
        let deadline = self.analysis_timeout;
        let task = tokio::spawn(async move {
            let outcome = match timeout(deadline, analyzer.analyze(&url)).await {
                Ok(result) => result,
                Err(_) => Err(AnalysisError::Timeout(deadline)),
            };

            let applied = state.lock().await.apply(generation, outcome);
            if !applied {
                debug!("Discarding stale completion for superseded analysis #{generation}");
            }
        });

        AnalysisHandle { generation, task }
    }

    /// Snapshot of the current analysis record, if any submission was made.
    pub async fn current(&self) -> Option<AnalysisRecord> {
        self.state.lock().await.record.clone()
    }
}
