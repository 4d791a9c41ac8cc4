// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Worker (C3) — spec.md §4.3, the core of the system.
//!
//! One Worker per accepted pipeline: it owns the in-memory Pipeline copy,
//! schedules ready steps against the job runner, consumes job-completion
//! events fanned out by the [`crate::Demultiplexer`], handles partial
//! failure, and drives the pipeline to a terminal status. Grounded on the
//! teacher's `buildit-scheduler` orchestrator's dependency walk
//! (`execution in declared order, deps_satisfied via all(...)`) generalized
//! from a single synchronous pass into an event-driven state machine, since
//! here steps complete asynchronously via webhook rather than by awaiting
//! in place.

use crate::demultiplexer::{Demultiplexer, ListenerId};
use crate::error::WorkerError;
use crate::updater::Updater;
use conduit_core::{JobEvent, JobId, JobSpec, JobStatus, Pipeline, PipelineStatus, StepStatus};
use conduit_jobrunner::JobRunner;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::mpsc;

/// Per-pipeline scheduler, failure handler, and status reporter.
pub struct Worker {
    pipeline: Pipeline,
    /// name -> index, used only for dependency-readiness checks (§4.3.1).
    steps_by_name: HashMap<String, usize>,
    /// job id -> index of the step that launched it. Presence means "I care
    /// about this job id"; this is the filter that drops events fanned out
    /// for jobs other Workers launched.
    running_jobs: HashMap<JobId, usize>,
    job_runner: Arc<dyn JobRunner>,
    demultiplexer: Arc<Demultiplexer>,
    listener_id: ListenerId,
    webhook_rx: mpsc::Receiver<JobEvent>,
    updater: Updater,
}

impl Worker {
    /// Register a private webhook output stream and build the Worker for a
    /// freshly accepted pipeline. Does not start the run loop — call
    /// [`Worker::run`] (typically via `tokio::spawn`) for that.
    pub fn new(
        pipeline: Pipeline,
        job_runner: Arc<dyn JobRunner>,
        demultiplexer: Arc<Demultiplexer>,
        updater: Updater,
    ) -> Self {
        let (listener_id, webhook_rx) = demultiplexer.register();
        let steps_by_name = pipeline
            .steps
            .iter()
            .enumerate()
            .map(|(i, s)| (s.name.clone(), i))
            .collect();
        Self {
            pipeline,
            steps_by_name,
            running_jobs: HashMap::new(),
            job_runner,
            demultiplexer,
            listener_id,
            webhook_rx,
            updater,
        }
    }

    /// Drive the pipeline to a terminal state (spec.md §4.3.2).
    pub async fn run(mut self) {
        self.pipeline.status = PipelineStatus::Running;
        self.updater.persist(&self.pipeline);

        if let Err(err) = self.run_ready_steps().await {
            tracing::error!(pipeline_id = %self.pipeline.id, error = %err, "job dispatch failed");
            self.pipeline.status = PipelineStatus::Error;
            self.updater.persist(&self.pipeline);
            self.cleanup().await;
            return;
        }

        loop {
            let event = match self.webhook_rx.recv().await {
                Some(event) => event,
                None => break,
            };
            match self.handle_update(event).await {
                Ok(true) => break,
                Ok(false) => continue,
                Err(err) => {
                    tracing::error!(pipeline_id = %self.pipeline.id, error = %err, "job dispatch failed");
                    self.pipeline.status = PipelineStatus::Error;
                    self.updater.persist(&self.pipeline);
                    break;
                }
            }
        }

        self.cleanup().await;
    }

    /// Unregister and drain any events already in flight from the
    /// Demultiplexer, so it never blocks sending to our now-dead stream.
    async fn cleanup(&mut self) {
        self.demultiplexer.unregister(self.listener_id);
        while self.webhook_rx.recv().await.is_some() {}
    }

    /// Dispatch every ready step (spec.md §4.3.5): Queued, all predecessors
    /// Successful, pipeline not Stopping.
    async fn run_ready_steps(&mut self) -> Result<(), WorkerError> {
        for idx in 0..self.pipeline.steps.len() {
            if self.is_ready(idx) {
                self.dispatch_step(idx).await?;
            }
        }
        Ok(())
    }

    fn is_ready(&self, idx: usize) -> bool {
        let step = &self.pipeline.steps[idx];
        if step.status != StepStatus::Queued {
            return false;
        }
        step.after.iter().all(|dep| {
            self.steps_by_name
                .get(dep)
                .is_some_and(|&dep_idx| self.pipeline.steps[dep_idx].status == StepStatus::Successful)
        })
    }

    async fn dispatch_step(&mut self, idx: usize) -> Result<(), WorkerError> {
        let spec = {
            let step = &self.pipeline.steps[idx];
            JobSpec {
                image: step.image_name.clone(),
                // Whitespace-only split, no shell quoting — spec.md §4.3.5's
                // documented simplification.
                cmds: step
                    .cmds
                    .iter()
                    .map(|c| c.split_whitespace().map(String::from).collect())
                    .collect(),
                webhook_url: self.demultiplexer.webhook_url().to_string(),
            }
        };

        let job = self.job_runner.create_job(spec).await?;
        self.running_jobs.insert(job.id.clone(), idx);

        let step = &mut self.pipeline.steps[idx];
        step.status = StepStatus::Running;
        step.job_url = Some(format!("{}/jobs/{}", self.job_runner.base_url(), job.id));
        self.updater.persist(&self.pipeline);
        Ok(())
    }

    /// spec.md §4.3.6.
    async fn handle_update(&mut self, event: JobEvent) -> Result<bool, WorkerError> {
        let idx = match self.running_jobs.remove(&event.id) {
            Some(idx) => idx,
            // Not ours, or a duplicate delivery for a job we already
            // finished handling — idempotent no-op.
            None => return Ok(false),
        };

        {
            let step = &mut self.pipeline.steps[idx];
            step.start_time = event.start_time;
            step.end_time = event.end_time;
            step.job_url = Some(format!("{}/jobs/{}", self.job_runner.base_url(), event.id));
            step.status = map_job_status(event.status);
        }

        let step_successful = self.pipeline.steps[idx].status == StepStatus::Successful;

        if self.pipeline.status != PipelineStatus::Stopping && !step_successful {
            self.enter_stopping().await;
        }

        if self.pipeline.status == PipelineStatus::Stopping {
            self.updater.persist(&self.pipeline);
            let done = self.running_jobs.is_empty();
            if done {
                self.pipeline.status = PipelineStatus::Failed;
                self.updater.persist(&self.pipeline);
            }
            return Ok(done);
        }

        // Still Running, and this step was Successful.
        self.updater.persist(&self.pipeline);
        self.run_ready_steps().await?;
        if self.pipeline.all_steps_successful() {
            self.pipeline.status = PipelineStatus::Successful;
            self.updater.persist(&self.pipeline);
            return Ok(true);
        }
        Ok(false)
    }

    /// First failure observed: stop every other in-flight job and mark
    /// still-queued steps as never going to run.
    async fn enter_stopping(&mut self) {
        self.pipeline.status = PipelineStatus::Stopping;
        let still_running: Vec<JobId> = self.running_jobs.keys().cloned().collect();
        for job_id in still_running {
            if let Err(err) = self.job_runner.stop_job(&job_id).await {
                tracing::warn!(job_id = %job_id, error = %err, "stop_job failed");
            }
            if let Some(idx) = self.running_jobs.remove(&job_id) {
                self.pipeline.steps[idx].status = StepStatus::Stopped;
            }
        }
        for step in &mut self.pipeline.steps {
            if step.status == StepStatus::Queued {
                step.status = StepStatus::NotRun;
            }
        }
    }
}

fn map_job_status(status: JobStatus) -> StepStatus {
    match status {
        JobStatus::Failed => StepStatus::Failed,
        JobStatus::Error => StepStatus::Error,
        JobStatus::Stopped => StepStatus::Stopped,
        JobStatus::Successful => StepStatus::Successful,
        // A job runner should never post Queued/Running to the webhook;
        // treat it as an internal-invariant surprise rather than crash.
        JobStatus::Queued | JobStatus::Running => StepStatus::Error,
    }
}

#[cfg(test)]
#[path = "worker_tests.rs"]
mod tests;
