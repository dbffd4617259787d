// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Alert severity levels.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Severity of a user-facing alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Error,
    Warning,
    Info,
}

impl Severity {
    /// Parse a wire severity string. Returns `None` for unrecognized values
    /// so callers can apply their own default.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("success") {
            Some(Severity::Success)
        } else if s.eq_ignore_ascii_case("error") {
            Some(Severity::Error)
        } else if s.eq_ignore_ascii_case("warning") {
            Some(Severity::Warning)
        } else if s.eq_ignore_ascii_case("info") {
            Some(Severity::Info)
        } else {
            None
        }
    }

    /// Default lifetime for an alert of this severity when the caller does
    /// not override it. Errors linger the longest.
    pub fn default_ttl(&self) -> Duration {
        match self {
            Severity::Success => Duration::from_millis(4000),
            Severity::Error => Duration::from_millis(6000),
            Severity::Warning => Duration::from_millis(5000),
            Severity::Info => Duration::from_millis(5000),
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Success => write!(f, "success"),
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
            Severity::Info => write!(f, "info"),
        }
    }
}

#[cfg(test)]
#[path = "severity_tests.rs"]
mod tests;
