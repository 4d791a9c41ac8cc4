// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Updater (C5) — spec.md §4.5.
//!
//! A thin, serialising wrapper around the store's `Update` operation. The
//! sole path through which Workers publish state; isolates persistence
//! failures by logging them rather than propagating them back to the
//! Worker, mirroring the teacher's `EventBus::send` pattern of logging and
//! swallowing a backing-store error rather than panicking the caller.

use conduit_core::Pipeline;
use conduit_store::PipelineStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct Updater {
    store: Arc<PipelineStore>,
}

impl Updater {
    pub fn new(store: Arc<PipelineStore>) -> Self {
        Self { store }
    }

    /// Publish a pipeline snapshot. Failures are logged, never surfaced.
    pub fn persist(&self, pipeline: &Pipeline) {
        if let Err(err) = self.store.update(pipeline.clone()) {
            tracing::error!(
                pipeline_id = %pipeline.id,
                error = %err,
                "failed to persist pipeline snapshot"
            );
        }
    }
}

#[cfg(test)]
#[path = "updater_tests.rs"]
mod tests;
