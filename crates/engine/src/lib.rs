// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! chime-engine: the alerting core.
//!
//! Four pieces, leaves first: the capacity-bounded [`NotificationStore`]
//! with dedup and timed eviction, the typed [`Dispatcher`] over it, the
//! reconnecting [`PushListener`] forwarding server events into the
//! dispatcher, and the [`JobPoller`] driving a backend job to one of four
//! terminal outcomes. Everything runs on one cooperative tokio runtime;
//! the store's mutex is the single choke point for shared state.

pub mod dispatch;
pub mod listener;
pub mod poller;
pub mod store;

pub use dispatch::Dispatcher;
pub use listener::{ConnectionState, ListenerConfig, PushListener};
pub use poller::{CancelFlag, JobPoller, PollConfig, PollError};
pub use store::{NotificationStore, StoreConfig};
