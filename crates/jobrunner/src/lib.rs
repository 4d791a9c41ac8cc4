// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Client for the external container-execution service (the *job runner*).
//!
//! Out of the core's hard-engineering scope (spec.md §1 lists the job runner
//! among the external collaborators), but the Worker (C3) needs something to
//! call. This crate defines the `JobRunner` trait the Worker depends on, a
//! `reqwest`-backed real implementation, and — behind the `test-support`
//! feature, mirroring the teacher's `Fake*Adapter` pattern — a fake double
//! used to drive the six end-to-end worker scenarios without real containers.

#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

mod http;

#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::{FakeJobRunner, RecordedCall};

pub use http::HttpJobRunner;

use async_trait::async_trait;
use conduit_core::{JobHandle, JobId, JobSpec};
use thiserror::Error;

/// Errors a job-runner client call can surface.
///
/// A `CreateJob` error is fatal to the owning pipeline (spec.md §7); a
/// `StopJob` error is logged and does not abort the Stopping flow.
#[derive(Debug, Error)]
pub enum JobRunnerError {
    #[error("job runner request failed: {0}")]
    Request(String),
    #[error("job runner returned an unexpected response: {0}")]
    UnexpectedResponse(String),
}

/// Operations the Worker (C3) needs from the external job runner.
#[async_trait]
pub trait JobRunner: Send + Sync {
    /// Launch a job, returning the runner-assigned handle.
    async fn create_job(&self, spec: JobSpec) -> Result<JobHandle, JobRunnerError>;

    /// Ask the runner to stop an in-flight job.
    async fn stop_job(&self, id: &JobId) -> Result<(), JobRunnerError>;

    /// The runner's base URL, used to build a step's `job_url`
    /// (`{base_url}/jobs/{job_id}`).
    fn base_url(&self) -> &str;
}
