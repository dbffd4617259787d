// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared setup for the integration specs.

use chime_core::{FakeClock, SequentialIdGen};
use chime_engine::{Dispatcher, NotificationStore, StoreConfig};

pub fn dispatcher() -> Dispatcher {
    Dispatcher::new(NotificationStore::with_parts(
        StoreConfig::default(),
        Box::new(SequentialIdGen::new("n")),
        Box::new(FakeClock::at(1_000)),
    ))
}
