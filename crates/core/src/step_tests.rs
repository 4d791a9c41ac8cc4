// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn queued_step_has_zeroed_timestamps_and_no_job_url() {
    let step = Step::queued(
        "build".to_string(),
        "ubuntu:14.04".to_string(),
        vec!["ls -la".to_string()],
        vec![],
    );
    assert_eq!(step.status, StepStatus::Queued);
    assert_eq!(step.start_time, epoch_zero());
    assert_eq!(step.end_time, epoch_zero());
    assert!(step.job_url.is_none());
}

#[test]
fn is_done_excludes_queued_and_running() {
    assert!(!StepStatus::Queued.is_done());
    assert!(!StepStatus::Running.is_done());
}

#[test]
fn is_done_includes_every_terminal_step_status() {
    for status in [
        StepStatus::Successful,
        StepStatus::Failed,
        StepStatus::Error,
        StepStatus::Stopped,
        StepStatus::NotRun,
    ] {
        assert!(status.is_done(), "{status:?} should be done");
    }
}

#[test]
fn status_serializes_snake_case() {
    let json = serde_json::to_string(&StepStatus::NotRun).unwrap();
    assert_eq!(json, "\"not-run\"");
}
