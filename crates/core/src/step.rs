// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Step identifier and state machine.

use crate::time::epoch_zero;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Status of a single step within a pipeline.
///
/// `Stopped` and `NotRun` only ever apply to steps, never to pipelines;
/// `Stopping` is the mirror-image case and only ever applies to pipelines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StepStatus {
    Queued,
    Running,
    Successful,
    Failed,
    Error,
    Stopped,
    NotRun,
}

impl Default for StepStatus {
    /// A step submitted without a status (the normal case: spec.md §6's
    /// submission shape never carries one) starts `Queued`.
    fn default() -> Self {
        StepStatus::Queued
    }
}

impl StepStatus {
    /// A step is done once it can never transition again.
    pub fn is_done(self) -> bool {
        matches!(
            self,
            StepStatus::Successful
                | StepStatus::Failed
                | StepStatus::Error
                | StepStatus::Stopped
                | StepStatus::NotRun
        )
    }
}

/// A single containerised step of a pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Step {
    /// Unique within the owning pipeline.
    pub name: String,
    #[serde(rename = "image")]
    pub image_name: String,
    /// Shell-word command strings; split on ASCII space when dispatched.
    pub cmds: Vec<String>,
    /// Names of steps that must be `Successful` before this one is ready.
    #[serde(default)]
    pub after: Vec<String>,
    #[serde(default)]
    pub job_url: Option<String>,
    /// Server-assigned; a submission body never carries one (spec.md §6).
    #[serde(default)]
    pub status: StepStatus,
    /// Server-assigned; defaults to epoch zero on a fresh submission.
    #[serde(default = "epoch_zero")]
    pub start_time: DateTime<Utc>,
    #[serde(default = "epoch_zero")]
    pub end_time: DateTime<Utc>,
}

impl Step {
    /// Build a step exactly as it must appear the moment a pipeline is
    /// accepted: `Queued`, no job URL, both timestamps pinned to epoch zero.
    pub fn queued(name: String, image_name: String, cmds: Vec<String>, after: Vec<String>) -> Self {
        Self {
            name,
            image_name,
            cmds,
            after,
            job_url: None,
            status: StepStatus::Queued,
            start_time: epoch_zero(),
            end_time: epoch_zero(),
        }
    }
}

#[cfg(test)]
#[path = "step_tests.rs"]
mod tests;
