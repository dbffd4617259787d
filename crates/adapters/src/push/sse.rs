// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Server-sent events transport.
//!
//! Holds one long-lived GET with `Accept: text/event-stream` and decodes the
//! `event:`/`data:` line framing incrementally as chunks arrive. The parser
//! is separate from the connection so framing can be tested without a
//! network.

use super::{PushConnection, PushFrame, PushTransport, TransportError};
use async_trait::async_trait;
use bytes::Bytes;
use futures_util::stream::BoxStream;
use futures_util::StreamExt;
use std::collections::VecDeque;

/// Incremental decoder for the `text/event-stream` wire format.
///
/// Feed raw chunks in arrival order; complete events fall out. Unknown
/// fields (`id`, `retry`) and comment lines are ignored. CRLF line endings
/// are tolerated.
#[derive(Debug, Default)]
pub struct SseParser {
    buf: String,
    event: Option<String>,
    data: Vec<String>,
}

impl SseParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume a chunk and return any events it completed.
    pub fn feed(&mut self, chunk: &[u8]) -> Vec<PushFrame> {
        self.buf.push_str(&String::from_utf8_lossy(chunk));
        let mut frames = Vec::new();
        while let Some(pos) = self.buf.find('\n') {
            let line: String = self.buf.drain(..=pos).collect();
            let line = line.trim_end_matches(['\n', '\r']);
            if line.is_empty() {
                self.flush(&mut frames);
            } else if line.starts_with(':') {
                // Comment / keep-alive line.
            } else {
                let (field, value) = match line.split_once(':') {
                    Some((field, value)) => (field, value.strip_prefix(' ').unwrap_or(value)),
                    None => (line, ""),
                };
                match field {
                    "event" => self.event = Some(value.to_string()),
                    "data" => self.data.push(value.to_string()),
                    _ => {}
                }
            }
        }
        frames
    }

    fn flush(&mut self, frames: &mut Vec<PushFrame>) {
        if !self.data.is_empty() {
            let event = self.event.take().unwrap_or_else(|| "message".to_string());
            frames.push(PushFrame::new(event, self.data.join("\n")));
        }
        self.event = None;
        self.data.clear();
    }
}

/// Push transport over a server-sent-events endpoint.
#[derive(Clone)]
pub struct SsePushTransport {
    client: reqwest::Client,
    url: String,
}

impl SsePushTransport {
    pub fn new(url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), url)
    }

    pub fn with_client(client: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }
}

#[async_trait]
impl PushTransport for SsePushTransport {
    type Conn = SseConnection;

    async fn connect(&self) -> Result<SseConnection, TransportError> {
        let response = self
            .client
            .get(&self.url)
            .header(reqwest::header::ACCEPT, "text/event-stream")
            .send()
            .await
            .map_err(|e| TransportError::Connect(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Connect(format!(
                "unexpected status {status}"
            )));
        }

        tracing::info!(url = %self.url, "push stream opened");
        Ok(SseConnection {
            stream: response.bytes_stream().boxed(),
            parser: SseParser::new(),
            pending: VecDeque::new(),
        })
    }
}

/// One live SSE connection.
pub struct SseConnection {
    stream: BoxStream<'static, reqwest::Result<Bytes>>,
    parser: SseParser,
    pending: VecDeque<PushFrame>,
}

#[async_trait]
impl PushConnection for SseConnection {
    async fn next_event(&mut self) -> Result<Option<PushFrame>, TransportError> {
        loop {
            if let Some(frame) = self.pending.pop_front() {
                return Ok(Some(frame));
            }
            match self.stream.next().await {
                None => return Ok(None),
                Some(Err(e)) => return Err(TransportError::Stream(e.to_string())),
                Some(Ok(chunk)) => self.pending.extend(self.parser.feed(&chunk)),
            }
        }
    }
}

#[cfg(test)]
#[path = "sse_tests.rs"]
mod tests;
