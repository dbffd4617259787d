// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! HTTP implementation of the job resource seam.
//!
//! `POST {base}/jobs` to create, `GET {base}/jobs/{id}` to read. Non-success
//! responses are decoded as [`ProblemDetails`] when the backend sent one;
//! otherwise a bare status message is surfaced.

use super::{JobApi, JobParams};
use async_trait::async_trait;
use chime_core::{ApiError, JobId, JobSnapshot, ProblemDetails};

#[derive(Clone)]
pub struct HttpJobApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpJobApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    async fn decode(response: reqwest::Response) -> Result<JobSnapshot, ApiError> {
        let status = response.status();
        if status.is_success() {
            return response
                .json::<JobSnapshot>()
                .await
                .map_err(|e| ApiError::Decode(e.to_string()));
        }

        // Prefer the backend's structured descriptor when it sent one.
        match response.json::<ProblemDetails>().await {
            Ok(problem) => Err(ApiError::Problem(problem)),
            Err(_) => Err(ApiError::Message(format!(
                "request failed with status {status}"
            ))),
        }
    }
}

#[async_trait]
impl JobApi for HttpJobApi {
    async fn create(&self, params: JobParams) -> Result<JobSnapshot, ApiError> {
        let url = format!("{}/jobs", self.base_url);
        tracing::debug!(%url, kind = %params.kind, "creating job");
        let response = self
            .client
            .post(&url)
            .json(&params)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        Self::decode(response).await
    }

    async fn fetch(&self, id: &JobId) -> Result<JobSnapshot, ApiError> {
        let url = format!("{}/jobs/{}", self.base_url, id);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        Self::decode(response).await
    }
}
