// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Errors surfaced by the engine crate's own components (not the job
//! runner's — those are [`conduit_jobrunner::JobRunnerError`]).

use conduit_jobrunner::JobRunnerError;
use thiserror::Error;

/// A fatal error encountered while driving a pipeline. Surfaces as
/// `PipelineStatus::Error` and ends the Worker's run loop (spec.md §4.3.4,
/// §4.3.6, §7).
#[derive(Debug, Error)]
pub enum WorkerError {
    #[error("job dispatch failed: {0}")]
    JobDispatch(#[from] JobRunnerError),
}

/// Errors submitting a pipeline to the [`crate::Manager`].
#[derive(Debug, Error)]
pub enum ManagerError {
    #[error("manager's ingress channel is closed")]
    Closed,
}
