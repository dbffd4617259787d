// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Job resource seam.
//!
//! The backend owns job state; this seam covers exactly two calls: create a
//! job, and read one snapshot of it. Failures enter the system here as
//! [`ApiError`] variants, never as raw transport errors.

mod http;

pub use http::HttpJobApi;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::FakeJobApi;

use async_trait::async_trait;
use chime_core::{ApiError, JobId, JobSnapshot};
use serde::{Deserialize, Serialize};

/// Parameters for creating a backend job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobParams {
    /// Kind of work to run (e.g. `"report"`, `"forecast"`).
    pub kind: String,
    /// Opaque job-specific arguments, forwarded verbatim.
    #[serde(default)]
    pub payload: serde_json::Value,
}

impl JobParams {
    pub fn new(kind: impl Into<String>, payload: serde_json::Value) -> Self {
        Self {
            kind: kind.into(),
            payload,
        }
    }
}

/// Adapter for the backend job resource.
#[async_trait]
pub trait JobApi: Send + Sync + 'static {
    /// Create a job; the returned snapshot carries its id and an initial
    /// non-terminal status.
    async fn create(&self, params: JobParams) -> Result<JobSnapshot, ApiError>;

    /// Read the current snapshot of a job.
    async fn fetch(&self, id: &JobId) -> Result<JobSnapshot, ApiError>;
}
