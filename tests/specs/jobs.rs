// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::prelude::dispatcher;
use chime_adapters::{FakeJobApi, JobParams};
use chime_core::{ApiError, JobSnapshot, JobState, ProblemDetails, Severity};
use chime_engine::{JobPoller, PollConfig, PollError};

#[tokio::test(start_paused = true)]
async fn a_report_job_runs_to_a_success_alert() {
    let dispatcher = dispatcher();
    let api = FakeJobApi::new();
    api.push_create(Ok(JobSnapshot::new("job-1", JobState::Pending)));
    api.script_fetches(
        "job-1",
        [
            Ok(JobSnapshot::new("job-1", JobState::Running).with_progress(30)),
            Ok(JobSnapshot::new("job-1", JobState::Running).with_progress(70)),
            Ok(JobSnapshot::new("job-1", JobState::Completed)
                .with_progress(100)
                .with_message("Report rendered")
                .with_result(serde_json::json!({"pages": 12}))),
        ],
    );

    let poller = JobPoller::new(api, dispatcher.clone(), PollConfig::default());
    let mut seen = Vec::new();
    let mut on_progress = |p: u8, _: Option<&str>| seen.push(p);
    let result = poller
        .create_and_poll(
            JobParams::new("report", serde_json::json!({"month": "2026-08"})),
            Some(&mut on_progress),
            None,
        )
        .await
        .unwrap();

    assert_eq!(result, Some(serde_json::json!({"pages": 12})));
    assert_eq!(seen, vec![30, 70, 100]);

    let alerts = dispatcher.store().notifications();
    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0].severity, Severity::Success);
    assert_eq!(alerts[0].message.as_deref(), Some("Report rendered"));
}

#[tokio::test(start_paused = true)]
async fn a_failing_job_raises_and_alerts_once() {
    let dispatcher = dispatcher();
    let api = FakeJobApi::new();
    api.script_fetches(
        "job-2",
        [Ok(JobSnapshot::new("job-2", JobState::Failed)
            .with_error(ProblemDetails::new("E1", "bad").with_status(500)))],
    );

    let poller = JobPoller::new(api, dispatcher.clone(), PollConfig::default());
    let err = poller
        .poll(&"job-2".into(), None, None)
        .await
        .unwrap_err();
    assert!(matches!(err, PollError::Failed(_)));

    let alerts = dispatcher.store().notifications();
    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0].severity, Severity::Error);
    assert_eq!(alerts[0].message.as_deref(), Some("bad"));
}

#[tokio::test(start_paused = true)]
async fn backend_rejection_never_reaches_the_poll_loop() {
    let dispatcher = dispatcher();
    let api = FakeJobApi::new();
    api.push_create(Err(ApiError::Message("backend is read-only".to_string())));

    let poller = JobPoller::new(api.clone(), dispatcher.clone(), PollConfig::default());
    let err = poller
        .create_and_poll(JobParams::new("forecast", serde_json::Value::Null), None, None)
        .await
        .unwrap_err();

    assert!(matches!(err, PollError::Api(_)));
    assert_eq!(api.fetch_count(), 0);
    assert_eq!(
        dispatcher.store().notifications()[0].message.as_deref(),
        Some("backend is read-only")
    );
}
