// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! chime-adapters: boundary adapters for the chime alerting core.
//!
//! The engine talks to the outside world through two seams: a push-stream
//! transport delivering server events, and a job API for creating and
//! polling backend jobs. Each seam has a real HTTP implementation and a
//! scripted fake for tests.

pub mod job;
pub mod push;

pub use job::{HttpJobApi, JobApi, JobParams};
pub use push::{PushConnection, PushFrame, PushTransport, SsePushTransport, TransportError};

#[cfg(any(test, feature = "test-support"))]
pub use job::FakeJobApi;
#[cfg(any(test, feature = "test-support"))]
pub use push::{FakeConnection, FakePushTransport};
