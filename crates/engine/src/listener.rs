// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Reconnecting push-stream listener.
//!
//! Owns at most one live server connection and forwards inbound alert
//! events to the dispatcher. On transport failure the connection is torn
//! down and a reconnect is scheduled after a fixed delay, indefinitely,
//! until a manual `disconnect`. The shutdown signal is rechecked at the top
//! of every attempt so a disconnect issued during the delay window wins.

use crate::dispatch::Dispatcher;
use chime_adapters::{PushConnection, PushFrame, PushTransport};
use chime_core::{Severity, Ttl};
use parking_lot::Mutex;
use serde::{Deserialize, Deserializer};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;

#[derive(Debug, Clone)]
pub struct ListenerConfig {
    /// Fixed delay between reconnect attempts.
    pub reconnect_delay: Duration,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            reconnect_delay: Duration::from_secs(5),
        }
    }
}

/// Observable connection state, for the UI's connectivity indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionState {
    Disconnected,
    Connecting,
    Connected,
}

struct ListenerState {
    connection: ConnectionState,
    /// Present while the run loop is alive (connected or between retries).
    task: Option<(watch::Sender<bool>, JoinHandle<()>)>,
}

/// Push-stream listener over a transport.
pub struct PushListener<T: PushTransport> {
    transport: Arc<T>,
    dispatcher: Dispatcher,
    config: ListenerConfig,
    state: Arc<Mutex<ListenerState>>,
}

impl<T: PushTransport> PushListener<T> {
    pub fn new(transport: T, dispatcher: Dispatcher, config: ListenerConfig) -> Self {
        Self {
            transport: Arc::new(transport),
            dispatcher,
            config,
            state: Arc::new(Mutex::new(ListenerState {
                connection: ConnectionState::Disconnected,
                task: None,
            })),
        }
    }

    /// Start the run loop. No-op while a loop is already connecting,
    /// connected, or waiting to reconnect.
    pub fn connect(&self) {
        let mut state = self.state.lock();
        if state.task.is_some() {
            return;
        }

        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        state.connection = ConnectionState::Connecting;
        let task = tokio::spawn(run_loop(
            Arc::clone(&self.transport),
            self.dispatcher.clone(),
            self.config.clone(),
            Arc::clone(&self.state),
            shutdown_rx,
        ));
        state.task = Some((shutdown_tx, task));
    }

    /// Stop listening. Terminal: clears any pending reconnect and no
    /// further automatic reconnection occurs until `connect` is called
    /// again.
    pub fn disconnect(&self) {
        let mut state = self.state.lock();
        if let Some((shutdown, task)) = state.task.take() {
            let _ = shutdown.send(true);
            task.abort();
            tracing::info!("push listener disconnected");
        }
        state.connection = ConnectionState::Disconnected;
    }

    pub fn state(&self) -> ConnectionState {
        self.state.lock().connection
    }
}

impl<T: PushTransport> Drop for PushListener<T> {
    fn drop(&mut self) {
        // The run loop holds the shared state alive; stop it with the
        // listener so nothing keeps reconnecting into the void.
        self.disconnect();
    }
}

fn set_state(state: &Mutex<ListenerState>, connection: ConnectionState) {
    state.lock().connection = connection;
}

async fn run_loop<T: PushTransport>(
    transport: Arc<T>,
    dispatcher: Dispatcher,
    config: ListenerConfig,
    state: Arc<Mutex<ListenerState>>,
    mut shutdown: watch::Receiver<bool>,
) {
    loop {
        // Rechecked at the top of every attempt: a disconnect issued during
        // the reconnect delay must win the race.
        if *shutdown.borrow() {
            break;
        }

        set_state(&state, ConnectionState::Connecting);
        match transport.connect().await {
            Ok(mut conn) => {
                set_state(&state, ConnectionState::Connected);
                tracing::info!("push stream connected");
                read_events(&mut conn, &dispatcher, &mut shutdown).await;
            }
            Err(err) => {
                tracing::warn!(%err, "push stream connect failed");
            }
        }
        set_state(&state, ConnectionState::Disconnected);

        if *shutdown.borrow() {
            break;
        }
        tokio::select! {
            _ = tokio::time::sleep(config.reconnect_delay) => {}
            _ = shutdown.changed() => {}
        }
    }
    set_state(&state, ConnectionState::Disconnected);
}

/// Read frames until the stream closes, fails, or shutdown is signalled.
async fn read_events<C: PushConnection>(
    conn: &mut C,
    dispatcher: &Dispatcher,
    shutdown: &mut watch::Receiver<bool>,
) {
    loop {
        tokio::select! {
            _ = shutdown.changed() => {
                if *shutdown.borrow() {
                    return;
                }
            }
            event = conn.next_event() => match event {
                Ok(Some(frame)) => handle_frame(dispatcher, &frame),
                Ok(None) => {
                    tracing::info!("push stream closed by server");
                    return;
                }
                Err(err) => {
                    tracing::warn!(%err, "push stream failed");
                    return;
                }
            }
        }
    }
}

/// Wire shape of an alert event. `duration` distinguishes absent (use the
/// severity default) from explicit `null` (persistent).
#[derive(Debug, Deserialize)]
struct PushPayload {
    severity: String,
    title: String,
    #[serde(default)]
    message: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    duration: Option<Option<u64>>,
}

fn double_option<'de, D>(d: D) -> Result<Option<Option<u64>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<u64>::deserialize(d).map(Some)
}

fn handle_frame(dispatcher: &Dispatcher, frame: &PushFrame) {
    match serde_json::from_str::<PushPayload>(&frame.data) {
        Ok(payload) => {
            let severity = Severity::parse(&payload.severity).unwrap_or(Severity::Info);
            let ttl = match payload.duration {
                None => Ttl::After(severity.default_ttl()),
                Some(None) => Ttl::Never,
                Some(Some(ms)) => Ttl::After(Duration::from_millis(ms)),
            };
            dispatcher.notify(severity, &payload.title, payload.message.as_deref(), ttl);
        }
        Err(err) => {
            // Malformed payloads are logged and dropped, never fatal.
            tracing::warn!(%err, event = %frame.event, "dropping malformed push payload");
        }
    }
}

#[cfg(test)]
#[path = "listener_tests.rs"]
mod tests;
