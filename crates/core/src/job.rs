// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Job identifier and observed state machine.
//!
//! The backend owns job state; the client only reads snapshots. Observed
//! transitions are `pending → running → {completed | failed | cancelled}`,
//! with pending/running interleaving arbitrarily before a terminal state.
//! Terminal states are never re-entered.

use crate::problem::ProblemDetails;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a backend job resource.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct JobId(pub String);

impl JobId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for JobId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for JobId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Status of a job as reported by the backend.
///
/// Some backend paths report `queued`/`done`; those are aliases of
/// `pending`/`completed`, not distinct states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobState {
    #[serde(alias = "queued")]
    Pending,
    Running,
    #[serde(alias = "done")]
    Completed,
    Failed,
    Cancelled,
}

impl JobState {
    /// Check if no further transition can occur from this state.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            JobState::Completed | JobState::Failed | JobState::Cancelled
        )
    }
}

impl fmt::Display for JobState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JobState::Pending => write!(f, "pending"),
            JobState::Running => write!(f, "running"),
            JobState::Completed => write!(f, "completed"),
            JobState::Failed => write!(f, "failed"),
            JobState::Cancelled => write!(f, "cancelled"),
        }
    }
}

/// Point-in-time view of a job resource. Never mutated by the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobSnapshot {
    pub id: JobId,
    pub status: JobState,
    /// Completion percentage in `0..=100`.
    #[serde(default)]
    pub progress: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ProblemDetails>,
    #[serde(default)]
    pub created_at_ms: u64,
    #[serde(default)]
    pub updated_at_ms: u64,
}

impl JobSnapshot {
    /// Minimal snapshot in the given state; fields beyond id/status take
    /// their wire defaults.
    pub fn new(id: impl Into<JobId>, status: JobState) -> Self {
        Self {
            id: id.into(),
            status,
            progress: 0,
            message: None,
            result: None,
            error: None,
            created_at_ms: 0,
            updated_at_ms: 0,
        }
    }

    pub fn with_progress(mut self, progress: u8) -> Self {
        self.progress = progress.min(100);
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn with_result(mut self, result: serde_json::Value) -> Self {
        self.result = Some(result);
        self
    }

    pub fn with_error(mut self, error: ProblemDetails) -> Self {
        self.error = Some(error);
        self
    }
}

#[cfg(test)]
#[path = "job_tests.rs"]
mod tests;
