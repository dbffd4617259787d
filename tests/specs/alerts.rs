// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::prelude::dispatcher;
use chime_core::Severity;
use std::time::Duration;

#[tokio::test(start_paused = true)]
async fn burst_of_identical_failures_yields_one_alert() {
    let dispatcher = dispatcher();

    // Three simultaneous requests failing identically.
    for _ in 0..3 {
        dispatcher.error("Save failed", Some("backend unreachable"));
    }
    assert_eq!(dispatcher.store().len(), 1);

    // After the dedup window the same failure is reportable again.
    tokio::time::sleep(Duration::from_millis(801)).await;
    dispatcher.error("Save failed", Some("backend unreachable"));
    assert_eq!(dispatcher.store().len(), 2);
}

#[tokio::test(start_paused = true)]
async fn alerts_expire_on_their_own_schedule() {
    let dispatcher = dispatcher();
    dispatcher.success("Saved", None); // 4s
    dispatcher.persistent(Severity::Warning, "Offline", Some("reconnecting"));

    tokio::time::sleep(Duration::from_millis(4_001)).await;
    let remaining = dispatcher.store().notifications();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].title, "Offline");

    // Persistent alerts go only on explicit dismissal.
    dispatcher.store().remove(&remaining[0].id);
    assert!(dispatcher.store().is_empty());
}

#[tokio::test(start_paused = true)]
async fn the_newest_five_alerts_win() {
    let dispatcher = dispatcher();
    for i in 0..8 {
        dispatcher.info(&format!("event {i}"), None);
    }

    let titles: Vec<_> = dispatcher
        .store()
        .notifications()
        .into_iter()
        .map(|n| n.title)
        .collect();
    assert_eq!(
        titles,
        vec!["event 7", "event 6", "event 5", "event 4", "event 3"]
    );
}
