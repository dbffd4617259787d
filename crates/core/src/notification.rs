// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Alert records and their identity/dedup types.

use crate::severity::Severity;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Unique identifier for a stored notification.
///
/// The empty id is a sentinel returned when an `add` was suppressed by the
/// dedup window; it never refers to a stored record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NotificationId(pub String);

impl NotificationId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Sentinel id for a suppressed duplicate.
    pub fn empty() -> Self {
        Self(String::new())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for NotificationId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for NotificationId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// How long an alert stays visible before the store removes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ttl {
    /// Use the store's configured default duration.
    Default,
    /// Auto-remove after the given duration. Zero means no timer is
    /// scheduled; the alert stays until explicitly removed.
    After(Duration),
    /// Persistent: never auto-removed.
    Never,
}

/// A user-facing alert. Immutable once created; destroyed by explicit
/// removal or its own expiry timer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub id: NotificationId,
    pub severity: Severity,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub created_at_ms: u64,
    /// `None` = persistent, never auto-removed.
    pub duration_ms: Option<u64>,
}

/// Identity of an alert for burst suppression: two alerts with the same
/// severity, title, and message are considered duplicates within the dedup
/// window. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DedupKey {
    severity: Severity,
    title: String,
    message: Option<String>,
}

impl DedupKey {
    pub fn of(severity: Severity, title: &str, message: Option<&str>) -> Self {
        Self {
            severity,
            title: title.to_string(),
            message: message.map(str::to_string),
        }
    }
}

#[cfg(test)]
#[path = "notification_tests.rs"]
mod tests;
