// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! In-memory pipeline store.
//!
//! Out of the core's hard-engineering scope (spec.md §1 calls the store an
//! external collaborator), but a real deployable service needs one, so this
//! crate provides the concurrent keyed map the Service façade and Updater
//! consume through `Add`/`Find`/`Update`.

#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

use conduit_core::{Pipeline, StoreError};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};

/// Concurrent in-memory keyed map of pipelines.
///
/// Exclusive lock on `add`/`update`, shared lock on `find`, matching the
/// concurrency model in spec.md §5 (`Pipeline store: concurrent map;
/// exclusive lock on Add/Update, shared lock on Find`).
#[derive(Default)]
pub struct PipelineStore {
    pipelines: RwLock<HashMap<i64, Pipeline>>,
    next_id: AtomicI64,
}

impl PipelineStore {
    pub fn new() -> Self {
        Self {
            pipelines: RwLock::new(HashMap::new()),
            next_id: AtomicI64::new(1),
        }
    }

    /// Assign an identifier and insert the pipeline, returning the stored copy.
    pub fn add(&self, mut pipeline: Pipeline) -> Pipeline {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        pipeline.id = id.into();
        self.pipelines.write().insert(id, pipeline.clone());
        pipeline
    }

    /// Look up a pipeline by id.
    pub fn find(&self, id: i64) -> Result<Pipeline, StoreError> {
        self.pipelines
            .read()
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }

    /// Overwrite the stored snapshot for a pipeline that already exists.
    pub fn update(&self, pipeline: Pipeline) -> Result<(), StoreError> {
        let id = pipeline.id.value();
        let mut pipelines = self.pipelines.write();
        if !pipelines.contains_key(&id) {
            return Err(StoreError::NotFound(id));
        }
        pipelines.insert(id, pipeline);
        Ok(())
    }
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
