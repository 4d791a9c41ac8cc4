// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Structural and cycle validation of a submitted pipeline.
//!
//! `validate` is a pure function: it never mutates its input and never
//! touches I/O. It is the sole gate between accepting and rejecting a
//! submission — anything that passes must be schedulable without further
//! structural checks.

use conduit_core::{Pipeline, ValidationErrorKind};
use std::collections::{HashMap, HashSet};

/// Validate a pipeline. Checks run in a fixed order; the first failure wins.
pub fn validate(pipeline: &Pipeline) -> Result<(), ValidationErrorKind> {
    if pipeline.name.is_empty() {
        return Err(ValidationErrorKind::MissingPipelineName);
    }
    if pipeline.steps.is_empty() {
        return Err(ValidationErrorKind::NoSteps);
    }
    for step in &pipeline.steps {
        if step.name.is_empty() {
            return Err(ValidationErrorKind::MissingStepName);
        }
    }
    for step in &pipeline.steps {
        if step.image_name.is_empty() {
            return Err(ValidationErrorKind::MissingImageName);
        }
    }
    for step in &pipeline.steps {
        if step.cmds.is_empty() || step.cmds.iter().any(|c| c.is_empty()) {
            return Err(ValidationErrorKind::MissingCommands);
        }
    }

    let mut seen_names = HashSet::with_capacity(pipeline.steps.len());
    for step in &pipeline.steps {
        if !seen_names.insert(step.name.as_str()) {
            return Err(ValidationErrorKind::NonUniqueStepNames);
        }
    }

    for step in &pipeline.steps {
        for dep in &step.after {
            if !seen_names.contains(dep.as_str()) {
                return Err(ValidationErrorKind::NonExistentStepDependency);
            }
        }
    }

    if has_cycle(pipeline) {
        return Err(ValidationErrorKind::CircularStepDependency);
    }

    Ok(())
}

/// Depth-first cycle detection with a per-traversal recursion stack.
///
/// The outer loop restarts the search from any unvisited node until the
/// whole graph (including disjoint components) has been covered. A back
/// edge — a dependency that reaches a node currently on the recursion
/// stack — is a cycle; a self-loop (`after` containing the step's own
/// name) is caught the same way, since the node is on its own stack the
/// instant its edges are walked.
fn has_cycle(pipeline: &Pipeline) -> bool {
    let edges: HashMap<&str, &[String]> = pipeline
        .steps
        .iter()
        .map(|s| (s.name.as_str(), s.after.as_slice()))
        .collect();

    let mut visited: HashSet<&str> = HashSet::new();
    for step in &pipeline.steps {
        let name = step.name.as_str();
        if visited.contains(name) {
            continue;
        }
        let mut stack: HashSet<&str> = HashSet::new();
        if dfs_has_cycle(name, &edges, &mut visited, &mut stack) {
            return true;
        }
    }
    false
}

fn dfs_has_cycle<'a>(
    node: &'a str,
    edges: &HashMap<&'a str, &'a [String]>,
    visited: &mut HashSet<&'a str>,
    stack: &mut HashSet<&'a str>,
) -> bool {
    if stack.contains(node) {
        return true;
    }
    if visited.contains(node) {
        return false;
    }
    visited.insert(node);
    stack.insert(node);
    if let Some(deps) = edges.get(node) {
        for dep in deps.iter() {
            if dfs_has_cycle(dep.as_str(), edges, visited, stack) {
                return true;
            }
        }
    }
    stack.remove(node);
    false
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
