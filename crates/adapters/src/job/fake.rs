// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake job API for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{JobApi, JobParams};
use async_trait::async_trait;
use chime_core::{ApiError, JobId, JobSnapshot};
use parking_lot::Mutex;
use std::collections::{HashMap, VecDeque};
use std::sync::Arc;

type FetchResult = Result<JobSnapshot, ApiError>;

struct FakeJobState {
    create_results: VecDeque<FetchResult>,
    fetch_scripts: HashMap<JobId, VecDeque<FetchResult>>,
    create_count: usize,
    fetch_count: usize,
}

/// Fake job API for testing.
///
/// Fetch results are scripted per job id and consumed in order; the final
/// scripted result repeats once the script runs dry, so a job scripted to
/// end `running` stays `running` forever.
#[derive(Clone)]
pub struct FakeJobApi {
    inner: Arc<Mutex<FakeJobState>>,
}

impl FakeJobApi {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(FakeJobState {
                create_results: VecDeque::new(),
                fetch_scripts: HashMap::new(),
                create_count: 0,
                fetch_count: 0,
            })),
        }
    }

    /// Queue a result for the next `create` call.
    pub fn push_create(&self, result: FetchResult) {
        self.inner.lock().create_results.push_back(result);
    }

    /// Append scripted fetch results for a job id.
    pub fn script_fetches(
        &self,
        id: impl Into<JobId>,
        results: impl IntoIterator<Item = FetchResult>,
    ) {
        self.inner
            .lock()
            .fetch_scripts
            .entry(id.into())
            .or_default()
            .extend(results);
    }

    /// Number of `fetch` calls observed so far.
    pub fn fetch_count(&self) -> usize {
        self.inner.lock().fetch_count
    }

    /// Number of `create` calls observed so far.
    pub fn create_count(&self) -> usize {
        self.inner.lock().create_count
    }
}

impl Default for FakeJobApi {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl JobApi for FakeJobApi {
    async fn create(&self, _params: JobParams) -> Result<JobSnapshot, ApiError> {
        let mut state = self.inner.lock();
        state.create_count += 1;
        match state.create_results.pop_front() {
            Some(result) => result,
            None => Err(ApiError::Message("no scripted create result".to_string())),
        }
    }

    async fn fetch(&self, id: &JobId) -> Result<JobSnapshot, ApiError> {
        let mut state = self.inner.lock();
        state.fetch_count += 1;
        let script = state
            .fetch_scripts
            .get_mut(id)
            .ok_or_else(|| ApiError::Message(format!("unknown job {id}")))?;
        match script.len() {
            0 => Err(ApiError::Message(format!("unknown job {id}"))),
            1 => script.front().cloned().unwrap_or(Err(ApiError::Unknown)),
            _ => script.pop_front().unwrap_or(Err(ApiError::Unknown)),
        }
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
