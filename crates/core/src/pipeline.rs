// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Pipeline identifier and state machine.

use crate::step::Step;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier for a pipeline, assigned by the store on insertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PipelineId(pub i64);

impl PipelineId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for PipelineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for PipelineId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

/// Status of an entire pipeline.
///
/// `Stopping` only ever applies to pipelines; it is the transient state
/// entered on first step failure, and only ever leaves to `Failed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PipelineStatus {
    Queued,
    Running,
    Stopping,
    Successful,
    Failed,
    Error,
}

impl Default for PipelineStatus {
    /// A pipeline submitted without a status (the normal case: spec.md §6's
    /// submission shape never carries one) starts `Queued`.
    fn default() -> Self {
        PipelineStatus::Queued
    }
}

impl PipelineStatus {
    /// Terminal statuses are never re-entered; a pipeline is never re-run.
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            PipelineStatus::Successful | PipelineStatus::Failed | PipelineStatus::Error
        )
    }
}

/// A named DAG of steps submitted as one unit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pipeline {
    /// Server-assigned by the store on insertion; a submission body never
    /// carries one (spec.md §6).
    #[serde(default)]
    pub id: PipelineId,
    pub name: String,
    pub steps: Vec<Step>,
    /// Server-assigned; a submission body never carries one (spec.md §6).
    #[serde(default)]
    pub status: PipelineStatus,
}

// `id` defaults to 0 when deserializing a submission body, which never
// carries one; the store overwrites it on insertion.
impl Default for PipelineId {
    fn default() -> Self {
        Self(0)
    }
}

impl Pipeline {
    /// Look up the index of a step by name.
    pub fn step_index(&self, name: &str) -> Option<usize> {
        self.steps.iter().position(|s| s.name == name)
    }

    /// True once every step is in a done state (Successful/Failed/Error/
    /// Stopped/NotRun) — the trigger for declaring the pipeline itself done.
    pub fn all_steps_done(&self) -> bool {
        self.steps.iter().all(|s| s.status.is_done())
    }

    /// True iff every step ended `Successful`.
    pub fn all_steps_successful(&self) -> bool {
        self.steps
            .iter()
            .all(|s| s.status == crate::step::StepStatus::Successful)
    }
}

#[cfg(test)]
#[path = "pipeline_tests.rs"]
mod tests;
