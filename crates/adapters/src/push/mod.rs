// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Push-stream transport seam.
//!
//! A transport hands out long-lived server-to-client connections that yield
//! named events until the stream closes or fails. The listener owns the
//! reconnect policy; a transport only reports what happened.

mod sse;

pub use sse::{SseConnection, SseParser, SsePushTransport};

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::{FakeConnection, FakePushTransport};

use async_trait::async_trait;
use thiserror::Error;

/// Errors from push-stream operations
#[derive(Debug, Clone, Error)]
pub enum TransportError {
    #[error("connect failed: {0}")]
    Connect(String),
    #[error("stream failure: {0}")]
    Stream(String),
}

/// One named server event with its raw payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PushFrame {
    pub event: String,
    pub data: String,
}

impl PushFrame {
    pub fn new(event: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            event: event.into(),
            data: data.into(),
        }
    }
}

/// Factory for push-stream connections.
#[async_trait]
pub trait PushTransport: Send + Sync + 'static {
    type Conn: PushConnection;

    /// Open a new connection to the server stream.
    async fn connect(&self) -> Result<Self::Conn, TransportError>;
}

/// A single live push-stream connection.
#[async_trait]
pub trait PushConnection: Send {
    /// Wait for the next event. `Ok(None)` means the server closed the
    /// stream cleanly; an error means the transport dropped.
    async fn next_event(&mut self) -> Result<Option<PushFrame>, TransportError>;
}
