// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::prelude::dispatcher;
use chime_adapters::{FakeConnection, FakePushTransport};
use chime_engine::{ConnectionState, ListenerConfig, PushListener};
use std::time::Duration;

#[tokio::test(start_paused = true)]
async fn server_events_become_alerts_and_survive_a_drop() {
    let dispatcher = dispatcher();
    let transport = FakePushTransport::new();
    transport.push_connection(
        FakeConnection::new()
            .frame(
                "notification",
                r#"{"severity":"success","title":"Forecast ready"}"#,
            )
            .then_error("proxy restart"),
    );
    transport.push_connection(
        FakeConnection::new()
            .frame(
                "notification",
                r#"{"severity":"info","title":"Reconnected","duration":60000}"#,
            )
            .then_hang(),
    );

    let listener = PushListener::new(
        transport.clone(),
        dispatcher.clone(),
        ListenerConfig::default(),
    );
    listener.connect();
    tokio::time::sleep(Duration::from_millis(1)).await;

    assert_eq!(dispatcher.store().notifications()[0].title, "Forecast ready");

    // The drop schedules a reconnect on the 5-second tick.
    tokio::time::sleep(Duration::from_secs(5)).await;
    assert_eq!(listener.state(), ConnectionState::Connected);
    assert_eq!(dispatcher.store().notifications()[0].title, "Reconnected");
    assert_eq!(transport.connect_count(), 2);

    listener.disconnect();
    tokio::time::sleep(Duration::from_secs(60)).await;
    assert_eq!(transport.connect_count(), 2);
}

#[tokio::test(start_paused = true)]
async fn garbage_on_the_stream_never_kills_the_listener() {
    let dispatcher = dispatcher();
    let transport = FakePushTransport::new();
    transport.push_connection(
        FakeConnection::new()
            .frame("notification", "garbage")
            .frame("notification", r#"{"severity":"warning","title":"ok"}"#)
            .then_hang(),
    );

    let listener = PushListener::new(
        transport.clone(),
        dispatcher.clone(),
        ListenerConfig::default(),
    );
    listener.connect();
    tokio::time::sleep(Duration::from_millis(1)).await;

    assert_eq!(listener.state(), ConnectionState::Connected);
    let alerts = dispatcher.store().notifications();
    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0].title, "ok");
}
