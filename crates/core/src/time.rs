// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Timestamp helpers shared by pipelines, steps, and jobs.

use chrono::{DateTime, Utc};

/// The fixed sentinel timestamp for steps that have not run.
///
/// Per the data model, a step's start/end time is this value until the step
/// is actually dispatched; `NotRun` steps keep it forever.
pub fn epoch_zero() -> DateTime<Utc> {
    DateTime::<Utc>::from_timestamp(0, 0).unwrap_or(DateTime::<Utc>::MIN_UTC)
}
