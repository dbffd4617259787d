// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Structured error descriptor produced by the backend.

use serde::{Deserialize, Serialize};

/// Machine-readable error descriptor with a human-readable message,
/// as surfaced by the collaborating HTTP layer. Consumed read-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProblemDetails {
    pub code: String,
    #[serde(default)]
    pub http_status: u16,
    pub user_message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trace_id: Option<String>,
}

impl ProblemDetails {
    pub fn new(code: impl Into<String>, user_message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            http_status: 0,
            user_message: user_message.into(),
            title: None,
            trace_id: None,
        }
    }

    pub fn with_status(mut self, http_status: u16) -> Self {
        self.http_status = http_status;
        self
    }
}

#[cfg(test)]
#[path = "problem_tests.rs"]
mod tests;
