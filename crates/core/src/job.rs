// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Job DTOs exchanged with the external job-runner service.
//!
//! The Worker never owns a `Job` — it owns the mapping from `JobId` to the
//! index of the step that launched it (see `conduit_engine::Worker`). These
//! types only describe the wire shape of the job-runner client and the
//! webhook payload it posts back.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier assigned by the job runner when a job is created.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct JobId(pub String);

impl JobId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Status of a job as reported by the job runner.
///
/// A distinct enum from `StepStatus` / `PipelineStatus`: jobs have no
/// `Stopping` or `NotRun` notion of their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobStatus {
    Queued,
    Running,
    Successful,
    Failed,
    Error,
    Stopped,
}

/// Request body for `CreateJob`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobSpec {
    pub image: String,
    /// Each inner vector is one command, already split into shell words.
    pub cmds: Vec<Vec<String>>,
    pub webhook_url: String,
}

/// The job runner's response to `CreateJob`, and the shape of the
/// `GET /jobs/{id}`-style record it maintains for the life of the job.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobHandle {
    pub id: JobId,
    pub image: String,
    pub cmds: Vec<Vec<String>>,
    pub webhook_url: String,
    pub status: JobStatus,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
}

/// The payload the job runner posts to the registered webhook URL on
/// completion. Identical in shape to `JobHandle` — the runner simply posts
/// its current record for the job.
pub type JobEvent = JobHandle;

#[cfg(test)]
#[path = "job_tests.rs"]
mod tests;
