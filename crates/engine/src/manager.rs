// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Manager (C4) — spec.md §4.4.
//!
//! Accepts newly-created pipelines over a bounded channel and spawns a
//! fresh [`crate::Worker`] for each one on a background task. Grounded on
//! the teacher's `daemon`'s single ingress-task-per-resource pattern
//! (`daemon/src/daemon.rs`'s run loop spawning one handler per accepted
//! connection), generalized here to pipelines instead of connections.

use crate::demultiplexer::Demultiplexer;
use crate::error::ManagerError;
use crate::updater::Updater;
use crate::worker::Worker;
use conduit_core::Pipeline;
use conduit_jobrunner::JobRunner;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Bound on pipelines awaiting their Worker spawn. Generous: spawning a
/// Worker is cheap (register + one task), so this only guards against
/// unbounded memory growth if submission genuinely outpaces spawning.
const INGRESS_BUFFER: usize = 100;

/// Accepts pipelines and spins up a Worker per pipeline.
#[derive(Clone)]
pub struct Manager {
    tx: mpsc::Sender<Pipeline>,
}

impl Manager {
    /// Build a Manager and start its background dispatch task.
    pub fn new(job_runner: Arc<dyn JobRunner>, demultiplexer: Arc<Demultiplexer>, updater: Updater) -> (Self, JoinHandle<()>) {
        let (tx, mut rx) = mpsc::channel::<Pipeline>(INGRESS_BUFFER);
        let handle = tokio::spawn(async move {
            while let Some(pipeline) = rx.recv().await {
                let worker = Worker::new(
                    pipeline,
                    Arc::clone(&job_runner),
                    Arc::clone(&demultiplexer),
                    updater.clone(),
                );
                tokio::spawn(worker.run());
            }
        });
        (Self { tx }, handle)
    }

    /// Hand off a freshly accepted pipeline for execution. Fire-and-forget:
    /// the caller is not notified of the pipeline's eventual outcome here —
    /// it observes that via the store (spec.md §4.4, Resolved Open Question
    /// 1: no cancellation handle, Workers are never joined on shutdown).
    pub async fn submit(&self, pipeline: Pipeline) -> Result<(), ManagerError> {
        self.tx.send(pipeline).await.map_err(|_| ManagerError::Closed)
    }
}

#[cfg(test)]
#[path = "manager_tests.rs"]
mod tests;
