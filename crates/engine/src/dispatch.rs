// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Typed dispatch layer over the notification store.
//!
//! Producers never touch the store directly: severity helpers apply the
//! per-severity default lifetimes, and `dispatch_error` turns a boundary
//! [`ApiError`] into an error alert by matching its closed variant set —
//! it cannot itself fail.

use crate::store::NotificationStore;
use chime_core::{ApiError, NotificationId, ProblemDetails, Severity, Ttl};

/// Convenience API for producing alerts.
#[derive(Clone)]
pub struct Dispatcher {
    store: NotificationStore,
}

impl Dispatcher {
    pub fn new(store: NotificationStore) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &NotificationStore {
        &self.store
    }

    /// Explicit-severity, explicit-lifetime entry point; the helpers below
    /// all funnel through here.
    pub fn notify(
        &self,
        severity: Severity,
        title: &str,
        message: Option<&str>,
        ttl: Ttl,
    ) -> NotificationId {
        self.store.add(severity, title, message, ttl)
    }

    pub fn success(&self, title: &str, message: Option<&str>) -> NotificationId {
        self.with_default_ttl(Severity::Success, title, message)
    }

    pub fn error(&self, title: &str, message: Option<&str>) -> NotificationId {
        self.with_default_ttl(Severity::Error, title, message)
    }

    pub fn warning(&self, title: &str, message: Option<&str>) -> NotificationId {
        self.with_default_ttl(Severity::Warning, title, message)
    }

    pub fn info(&self, title: &str, message: Option<&str>) -> NotificationId {
        self.with_default_ttl(Severity::Info, title, message)
    }

    /// Alert that stays until the user dismisses it.
    pub fn persistent(
        &self,
        severity: Severity,
        title: &str,
        message: Option<&str>,
    ) -> NotificationId {
        self.notify(severity, title, message, Ttl::Never)
    }

    /// Surface a boundary failure as an error alert. Picks the user-facing
    /// message from the error's variant; never fails.
    pub fn dispatch_error(&self, err: &ApiError, title: &str) -> NotificationId {
        tracing::warn!(%err, title, "dispatching error alert");
        let message = err.user_message();
        self.with_default_ttl(Severity::Error, title, Some(&message))
    }

    /// Surface a job's structured error descriptor as an error alert.
    pub fn dispatch_problem(&self, problem: &ProblemDetails, title: &str) -> NotificationId {
        tracing::warn!(code = %problem.code, title, "dispatching problem alert");
        self.with_default_ttl(Severity::Error, title, Some(&problem.user_message))
    }

    fn with_default_ttl(
        &self,
        severity: Severity,
        title: &str,
        message: Option<&str>,
    ) -> NotificationId {
        self.notify(severity, title, message, Ttl::After(severity.default_ttl()))
    }
}

#[cfg(test)]
#[path = "dispatch_tests.rs"]
mod tests;
