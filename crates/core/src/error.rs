// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Closed boundary error type.
//!
//! Failures from the collaborating HTTP layer enter the system as exactly
//! one of these variants, established at the adapter boundary. The dispatch
//! API matches over this finite set to pick a user-facing message instead of
//! probing an unknown value's shape at runtime.

use crate::problem::ProblemDetails;
use std::borrow::Cow;
use thiserror::Error;

/// Error surfaced by a backend call.
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// The backend returned a structured error descriptor.
    #[error("{}", .0.user_message)]
    Problem(ProblemDetails),
    /// A bare human-readable message with no structure around it.
    #[error("{0}")]
    Message(String),
    /// The request never produced a usable response (connect, TLS, reset).
    #[error("transport failure: {0}")]
    Transport(String),
    /// The response body did not match the expected shape.
    #[error("malformed response: {0}")]
    Decode(String),
    /// Nothing usable could be extracted from the failure site.
    #[error("An unknown error occurred")]
    Unknown,
}

impl ApiError {
    /// Message to show the user for this failure. Never fails.
    pub fn user_message(&self) -> Cow<'_, str> {
        match self {
            ApiError::Problem(p) => Cow::Borrowed(p.user_message.as_str()),
            ApiError::Message(s) => Cow::Borrowed(s.as_str()),
            ApiError::Transport(_) | ApiError::Decode(_) => Cow::Owned(self.to_string()),
            ApiError::Unknown => Cow::Borrowed("An unknown error occurred"),
        }
    }

    /// The structured descriptor, if this failure carried one.
    pub fn problem(&self) -> Option<&ProblemDetails> {
        match self {
            ApiError::Problem(p) => Some(p),
            _ => None,
        }
    }
}

impl From<ProblemDetails> for ApiError {
    fn from(p: ProblemDetails) -> Self {
        ApiError::Problem(p)
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
