// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Service façade (C6) — spec.md §4.6.
//!
//! The single entry point the HTTP layer calls into: validate, stamp,
//! store, and hand off to the Manager for submission; look up by id for
//! retrieval. Grounded on the teacher's CLI-facing `core::Service` (the
//! thin layer `cli`/`daemon` both call through rather than touching the
//! store or engine directly).

use conduit_core::{epoch_zero, Pipeline, PipelineStatus, StepStatus, ValidationErrorKind};
use conduit_engine::{Manager, ManagerError};
use conduit_store::PipelineStore;
use conduit_validate::validate;
use std::sync::Arc;
use thiserror::Error;

pub use conduit_core::StoreError;

/// Errors surfaced by the Service façade.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrorKind),
    #[error("could not submit pipeline for execution: {0}")]
    Submission(#[from] ManagerError),
}

/// Accepts and retrieves pipelines, delegating execution to the engine.
#[derive(Clone)]
pub struct Service {
    store: Arc<PipelineStore>,
    manager: Manager,
}

impl Service {
    pub fn new(store: Arc<PipelineStore>, manager: Manager) -> Self {
        Self { store, manager }
    }

    /// Validate, stamp `Queued` with zeroed timestamps, persist, and hand
    /// off to the Manager for asynchronous execution. Returns the stored
    /// pipeline (with its assigned id) on success.
    pub async fn add(&self, mut pipeline: Pipeline) -> Result<Pipeline, ServiceError> {
        validate(&pipeline)?;

        pipeline.status = PipelineStatus::Queued;
        for step in &mut pipeline.steps {
            step.status = StepStatus::Queued;
            step.job_url = None;
            step.start_time = epoch_zero();
            step.end_time = epoch_zero();
        }

        let stored = self.store.add(pipeline);
        self.manager.submit(stored.clone()).await?;
        Ok(stored)
    }

    /// Look up a pipeline by id.
    pub fn find(&self, id: i64) -> Result<Pipeline, StoreError> {
        self.store.find(id)
    }
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
