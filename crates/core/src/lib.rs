// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! chime-core: data model for the chime alerting core.
//!
//! Pure types shared by the boundary adapters and the engine: alert
//! severities and records, job snapshots, the structured error descriptor,
//! and the closed boundary error type. No IO lives here.

pub mod clock;
pub mod error;
pub mod id;
pub mod job;
pub mod notification;
pub mod problem;
pub mod severity;

pub use clock::{Clock, FakeClock, SystemClock};
pub use error::ApiError;
pub use id::{IdGen, SequentialIdGen, UuidIdGen};
pub use job::{JobId, JobSnapshot, JobState};
pub use notification::{DedupKey, Notification, NotificationId, Ttl};
pub use problem::ProblemDetails;
pub use severity::Severity;
