// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use chime_core::JobState;

#[tokio::test]
async fn scripted_fetches_consume_in_order_and_repeat_last() {
    let api = FakeJobApi::new();
    api.script_fetches(
        "job-1",
        [
            Ok(JobSnapshot::new("job-1", JobState::Pending)),
            Ok(JobSnapshot::new("job-1", JobState::Running).with_progress(50)),
        ],
    );

    let id = JobId::new("job-1");
    assert_eq!(api.fetch(&id).await.unwrap().status, JobState::Pending);
    assert_eq!(api.fetch(&id).await.unwrap().progress, 50);
    // Last result repeats.
    assert_eq!(api.fetch(&id).await.unwrap().progress, 50);
    assert_eq!(api.fetch_count(), 3);
}

#[tokio::test]
async fn unknown_job_is_an_error() {
    let api = FakeJobApi::new();
    let err = api.fetch(&JobId::new("missing")).await.unwrap_err();
    assert!(matches!(err, ApiError::Message(_)));
}

#[tokio::test]
async fn create_results_are_scripted() {
    let api = FakeJobApi::new();
    api.push_create(Ok(JobSnapshot::new("job-2", JobState::Pending)));

    let params = JobParams::new("report", serde_json::json!({"month": "2026-08"}));
    let snap = api.create(params.clone()).await.unwrap();
    assert_eq!(snap.id, JobId::new("job-2"));

    // Script exhausted.
    assert!(api.create(params).await.is_err());
    assert_eq!(api.create_count(), 2);
}

#[tokio::test]
async fn scripted_fetch_error_surfaces() {
    let api = FakeJobApi::new();
    api.script_fetches("job-3", [Err(ApiError::Transport("reset".to_string()))]);

    let err = api.fetch(&JobId::new("job-3")).await.unwrap_err();
    assert!(matches!(err, ApiError::Transport(_)));
}
