// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake job runner for deterministic worker testing.

use crate::{JobRunner, JobRunnerError};
use async_trait::async_trait;
use conduit_core::{epoch_zero, JobHandle, JobId, JobSpec, JobStatus};
use parking_lot::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// A call recorded by [`FakeJobRunner`], for assertions in worker tests.
#[derive(Debug, Clone)]
pub enum RecordedCall {
    CreateJob(JobSpec),
    StopJob(JobId),
}

/// Scriptable, call-recording double for [`JobRunner`].
///
/// Assigns sequential ids (`job-1`, `job-2`, ...) so tests can correlate a
/// dispatched step with the job event they inject afterwards. Mirrors the
/// teacher's `Fake*Adapter` pattern: an `Arc<Mutex<..>>`-guarded inner state,
/// a `calls()` accessor, and settable one-shot errors.
#[derive(Clone)]
pub struct FakeJobRunner {
    inner: Arc<Mutex<Inner>>,
    next_id: Arc<AtomicU64>,
    base_url: Arc<str>,
}

struct Inner {
    calls: Vec<RecordedCall>,
    create_error: Option<String>,
    stop_error: Option<String>,
}

impl FakeJobRunner {
    pub fn new() -> Self {
        Self::with_base_url("http://jobrunner.test")
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                calls: Vec::new(),
                create_error: None,
                stop_error: None,
            })),
            next_id: Arc::new(AtomicU64::new(1)),
            base_url: Arc::from(base_url.into()),
        }
    }

    /// All calls recorded so far, in order.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.inner.lock().calls.clone()
    }

    /// Force the next `create_job` call to fail.
    pub fn fail_next_create(&self, message: impl Into<String>) {
        self.inner.lock().create_error = Some(message.into());
    }

    /// Force the next `stop_job` call to fail.
    pub fn fail_next_stop(&self, message: impl Into<String>) {
        self.inner.lock().stop_error = Some(message.into());
    }
}

impl Default for FakeJobRunner {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl JobRunner for FakeJobRunner {
    async fn create_job(&self, spec: JobSpec) -> Result<JobHandle, JobRunnerError> {
        let mut inner = self.inner.lock();
        inner.calls.push(RecordedCall::CreateJob(spec.clone()));
        if let Some(message) = inner.create_error.take() {
            return Err(JobRunnerError::Request(message));
        }
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        Ok(JobHandle {
            id: JobId::new(format!("job-{id}")),
            image: spec.image,
            cmds: spec.cmds,
            webhook_url: spec.webhook_url,
            status: JobStatus::Queued,
            start_time: epoch_zero(),
            end_time: epoch_zero(),
        })
    }

    async fn stop_job(&self, id: &JobId) -> Result<(), JobRunnerError> {
        let mut inner = self.inner.lock();
        inner.calls.push(RecordedCall::StopJob(id.clone()));
        if let Some(message) = inner.stop_error.take() {
            return Err(JobRunnerError::Request(message));
        }
        Ok(())
    }

    fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
