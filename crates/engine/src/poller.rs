// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Bounded job polling client.
//!
//! Turns a fire-and-forget backend job into a sequence of progress
//! callbacks ending in exactly one of four outcomes: success, failure,
//! cancellation, or timeout. Every terminal outcome is surfaced as an alert
//! and, except success, also raised as a typed error so calling code can
//! react programmatically.

use crate::dispatch::Dispatcher;
use chime_adapters::{JobApi, JobParams};
use chime_core::{ApiError, JobId, JobState, ProblemDetails};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

/// Cooperative cancellation signal, checked at the top of every poll
/// iteration.
pub type CancelFlag = Arc<AtomicBool>;

/// Progress callback: completion percentage plus the job's status message.
pub type ProgressFn<'a> = &'a mut (dyn FnMut(u8, Option<&str>) + Send);

#[derive(Debug, Clone)]
pub struct PollConfig {
    /// Delay between status checks.
    pub interval: Duration,
    /// Maximum number of status checks before giving up.
    pub max_attempts: u32,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            interval: Duration::from_millis(1000),
            max_attempts: 60,
        }
    }
}

/// Terminal failure of a poll loop.
#[derive(Debug, Error)]
pub enum PollError {
    #[error("job failed: {}", .0.user_message)]
    Failed(ProblemDetails),
    #[error("job cancelled: {}", .0.user_message)]
    Cancelled(ProblemDetails),
    #[error("job {id} did not finish within {attempts} status checks")]
    TimedOut { id: JobId, attempts: u32 },
    /// The caller's cancel flag was raised; no alert is dispatched.
    #[error("polling interrupted by caller")]
    Interrupted,
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Polls a backend job to a terminal outcome, reporting progress and
/// feeding the dispatcher along the way.
pub struct JobPoller<A: JobApi> {
    api: Arc<A>,
    dispatcher: Dispatcher,
    config: PollConfig,
}

impl<A: JobApi> JobPoller<A> {
    pub fn new(api: A, dispatcher: Dispatcher, config: PollConfig) -> Self {
        Self {
            api: Arc::new(api),
            dispatcher,
            config,
        }
    }

    /// Create a job, then poll it. A creation failure short-circuits
    /// through error translation without entering the poll loop.
    pub async fn create_and_poll(
        &self,
        params: JobParams,
        on_progress: Option<ProgressFn<'_>>,
        cancel: Option<&CancelFlag>,
    ) -> Result<Option<serde_json::Value>, PollError> {
        let snapshot = match self.api.create(params).await {
            Ok(snapshot) => snapshot,
            Err(err) => {
                self.dispatcher.dispatch_error(&err, "Job creation failed");
                return Err(err.into());
            }
        };
        tracing::info!(id = %snapshot.id, status = %snapshot.status, "job created");
        self.poll(&snapshot.id, on_progress, cancel).await
    }

    /// Poll one job until a terminal state, the attempt budget runs out, or
    /// the cancel flag is raised. Resolves with the job's result on
    /// completion.
    ///
    /// A snapshot fetch failure is routed through error translation once
    /// and re-raised — never silently retried; the caller decides whether
    /// to start over.
    pub async fn poll(
        &self,
        id: &JobId,
        mut on_progress: Option<ProgressFn<'_>>,
        cancel: Option<&CancelFlag>,
    ) -> Result<Option<serde_json::Value>, PollError> {
        for attempt in 1..=self.config.max_attempts {
            if cancel.is_some_and(|flag| flag.load(Ordering::SeqCst)) {
                tracing::info!(%id, attempt, "polling interrupted by caller");
                return Err(PollError::Interrupted);
            }

            let snapshot = match self.api.fetch(id).await {
                Ok(snapshot) => snapshot,
                Err(err) => {
                    self.dispatcher.dispatch_error(&err, "Job status check failed");
                    return Err(err.into());
                }
            };

            if let Some(callback) = on_progress.as_mut() {
                callback(snapshot.progress, snapshot.message.as_deref());
            }

            match snapshot.status {
                JobState::Completed => {
                    let message = snapshot
                        .message
                        .as_deref()
                        .unwrap_or("The job finished successfully");
                    self.dispatcher.success("Job completed", Some(message));
                    tracing::info!(%id, attempt, "job completed");
                    return Ok(snapshot.result);
                }
                JobState::Failed => {
                    let problem = snapshot
                        .error
                        .unwrap_or_else(|| ProblemDetails::new("JOB_FAILED", "The job failed"));
                    self.dispatcher.dispatch_problem(&problem, "Job failed");
                    return Err(PollError::Failed(problem));
                }
                JobState::Cancelled => {
                    let problem = snapshot.error.unwrap_or_else(|| {
                        ProblemDetails::new("JOB_CANCELLED", "The job was cancelled")
                    });
                    self.dispatcher.dispatch_problem(&problem, "Job cancelled");
                    return Err(PollError::Cancelled(problem));
                }
                JobState::Pending | JobState::Running => {
                    if attempt < self.config.max_attempts {
                        tokio::time::sleep(self.config.interval).await;
                    }
                }
            }
        }

        let problem = ProblemDetails::new(
            "TIMEOUT",
            format!(
                "The job did not finish within {} status checks",
                self.config.max_attempts
            ),
        );
        self.dispatcher.dispatch_problem(&problem, "Job timed out");
        Err(PollError::TimedOut {
            id: id.clone(),
            attempts: self.config.max_attempts,
        })
    }
}

#[cfg(test)]
#[path = "poller_tests.rs"]
mod tests;
