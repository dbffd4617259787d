// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake push transport for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{PushConnection, PushFrame, PushTransport, TransportError};
use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::sync::Arc;

/// Scripted step for a fake connection.
type FrameResult = Result<Option<PushFrame>, TransportError>;

enum Step {
    Yield(FrameResult),
    /// Never resolves; models an idle but healthy stream.
    Hang,
}

/// Scripted push connection: yields its steps in order, then reports a
/// clean close.
pub struct FakeConnection {
    steps: VecDeque<Step>,
}

impl FakeConnection {
    pub fn new() -> Self {
        Self {
            steps: VecDeque::new(),
        }
    }

    /// Yield one event.
    pub fn frame(mut self, event: &str, data: &str) -> Self {
        self.steps
            .push_back(Step::Yield(Ok(Some(PushFrame::new(event, data)))));
        self
    }

    /// Fail the stream after the preceding steps.
    pub fn then_error(mut self, message: &str) -> Self {
        self.steps
            .push_back(Step::Yield(Err(TransportError::Stream(message.to_string()))));
        self
    }

    /// Stay open without yielding anything further.
    pub fn then_hang(mut self) -> Self {
        self.steps.push_back(Step::Hang);
        self
    }
}

impl Default for FakeConnection {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PushConnection for FakeConnection {
    async fn next_event(&mut self) -> Result<Option<PushFrame>, TransportError> {
        if matches!(self.steps.front(), Some(Step::Hang)) {
            std::future::pending::<()>().await;
        }
        match self.steps.pop_front() {
            Some(Step::Yield(step)) => step,
            Some(Step::Hang) | None => Ok(None),
        }
    }
}

struct FakePushState {
    connections: VecDeque<Result<FakeConnection, TransportError>>,
    connect_count: usize,
}

/// Fake push transport for testing.
///
/// Hands out pre-scripted connections in order; once the script runs dry,
/// further connects fail. Records how many times `connect` was called.
#[derive(Clone)]
pub struct FakePushTransport {
    inner: Arc<Mutex<FakePushState>>,
}

impl FakePushTransport {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(FakePushState {
                connections: VecDeque::new(),
                connect_count: 0,
            })),
        }
    }

    /// Queue a scripted connection for the next `connect` call.
    pub fn push_connection(&self, conn: FakeConnection) {
        self.inner.lock().connections.push_back(Ok(conn));
    }

    /// Queue a connect failure.
    pub fn push_connect_error(&self, message: &str) {
        self.inner
            .lock()
            .connections
            .push_back(Err(TransportError::Connect(message.to_string())));
    }

    /// Number of `connect` calls observed so far.
    pub fn connect_count(&self) -> usize {
        self.inner.lock().connect_count
    }
}

impl Default for FakePushTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PushTransport for FakePushTransport {
    type Conn = FakeConnection;

    async fn connect(&self) -> Result<FakeConnection, TransportError> {
        let mut state = self.inner.lock();
        state.connect_count += 1;
        match state.connections.pop_front() {
            Some(conn) => conn,
            None => Err(TransportError::Connect("no scripted connection".to_string())),
        }
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
