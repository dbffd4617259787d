// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Capacity-bounded notification store with dedup and timed eviction.
//!
//! All mutations funnel through `add`/`remove`/`clear` behind one mutex.
//! Each stored entry owns its expiry as a tagged union: either a live timer
//! handle or nothing at all for persistent alerts, so a removed entry takes
//! its timer with it and leaks are impossible by construction.

use chime_core::{
    Clock, DedupKey, IdGen, Notification, NotificationId, Severity, SystemClock, Ttl, UuidIdGen,
};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::AbortHandle;
use tokio::time::Instant;

/// Tuning knobs for the store. The defaults reproduce the production
/// constants; tests shrink them.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Maximum number of alerts held at once; older entries are evicted.
    pub capacity: usize,
    /// Window during which a structurally identical alert is suppressed.
    pub dedup_window: Duration,
    /// Lifetime used when a caller asks for [`Ttl::Default`].
    pub default_ttl: Duration,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            capacity: 5,
            dedup_window: Duration::from_millis(800),
            default_ttl: Duration::from_millis(3000),
        }
    }
}

/// Expiry state owned by a stored entry.
enum Expiry {
    /// A removal timer is live; aborting the handle cancels it.
    Active(AbortHandle),
    /// Never auto-removed.
    Persistent,
}

impl Expiry {
    fn cancel(&self) {
        if let Expiry::Active(handle) = self {
            handle.abort();
        }
    }
}

struct Entry {
    notification: Notification,
    expiry: Expiry,
}

struct StoreState {
    /// Most-recent-first.
    entries: Vec<Entry>,
    /// Dedup keys accepted within the sliding window.
    recent: HashMap<DedupKey, Instant>,
}

struct StoreInner {
    config: StoreConfig,
    ids: Box<dyn IdGen>,
    clock: Box<dyn Clock>,
    state: Mutex<StoreState>,
}

/// Bounded, ordered collection of user-facing alerts.
///
/// Cheaply cloneable handle; construct one and inject it wherever alerts
/// are produced or rendered. Operations are synchronous state transitions,
/// but `add` spawns expiry timers and therefore must run inside a tokio
/// runtime.
#[derive(Clone)]
pub struct NotificationStore {
    inner: Arc<StoreInner>,
}

impl NotificationStore {
    pub fn new(config: StoreConfig) -> Self {
        Self::with_parts(config, Box::new(UuidIdGen), Box::new(SystemClock))
    }

    /// Construct with injected id generation and clock (tests).
    pub fn with_parts(config: StoreConfig, ids: Box<dyn IdGen>, clock: Box<dyn Clock>) -> Self {
        Self {
            inner: Arc::new(StoreInner {
                config,
                ids,
                clock,
                state: Mutex::new(StoreState {
                    entries: Vec::new(),
                    recent: HashMap::new(),
                }),
            }),
        }
    }

    /// Add an alert.
    ///
    /// Returns the empty sentinel id without storing anything when an
    /// identical `(severity, title, message)` was accepted within the dedup
    /// window — three simultaneous requests failing the same way produce
    /// one alert. Otherwise the record is prepended, the collection is
    /// truncated to capacity (evicted entries lose their timers), and a
    /// removal timer is scheduled for any positive duration.
    pub fn add(
        &self,
        severity: Severity,
        title: &str,
        message: Option<&str>,
        ttl: Ttl,
    ) -> NotificationId {
        let now = Instant::now();
        let key = DedupKey::of(severity, title, message);
        let duration = match ttl {
            Ttl::Default => Some(self.inner.config.default_ttl),
            Ttl::After(d) => Some(d),
            Ttl::Never => None,
        };

        let mut state = self.inner.state.lock();

        let window = self.inner.config.dedup_window;
        state
            .recent
            .retain(|_, accepted| now.duration_since(*accepted) < window);
        if state.recent.contains_key(&key) {
            tracing::debug!(%severity, title, "suppressed duplicate alert");
            return NotificationId::empty();
        }
        state.recent.insert(key, now);

        let id = NotificationId::new(self.inner.ids.next());
        let notification = Notification {
            id: id.clone(),
            severity,
            title: title.to_string(),
            message: message.map(str::to_string),
            created_at_ms: self.inner.clock.epoch_ms(),
            duration_ms: duration.map(|d| d.as_millis() as u64),
        };

        let expiry = match duration {
            Some(d) if !d.is_zero() => {
                let store = self.clone();
                let expire_id = id.clone();
                let handle = tokio::spawn(async move {
                    tokio::time::sleep(d).await;
                    store.remove(&expire_id);
                });
                Expiry::Active(handle.abort_handle())
            }
            _ => Expiry::Persistent,
        };

        state.entries.insert(0, Entry {
            notification,
            expiry,
        });
        while state.entries.len() > self.inner.config.capacity {
            if let Some(evicted) = state.entries.pop() {
                evicted.expiry.cancel();
                tracing::debug!(id = %evicted.notification.id, "evicted alert over capacity");
            }
        }

        id
    }

    /// Remove an alert and cancel its timer. Idempotent; unknown ids are a
    /// no-op.
    pub fn remove(&self, id: &NotificationId) {
        let mut state = self.inner.state.lock();
        if let Some(pos) = state
            .entries
            .iter()
            .position(|e| e.notification.id == *id)
        {
            let entry = state.entries.remove(pos);
            entry.expiry.cancel();
        }
    }

    /// Drop all alerts and cancel every pending timer.
    pub fn clear(&self) {
        let mut state = self.inner.state.lock();
        for entry in state.entries.drain(..) {
            entry.expiry.cancel();
        }
    }

    /// Current alerts, most recent first. Render surface for the UI.
    pub fn notifications(&self) -> Vec<Notification> {
        let state = self.inner.state.lock();
        state
            .entries
            .iter()
            .map(|e| e.notification.clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.inner.state.lock().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
