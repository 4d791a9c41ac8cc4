// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error kinds shared across the service boundary.

use thiserror::Error;

/// The eight ways a submitted pipeline can fail structural validation.
///
/// Checks run in a fixed order (see `conduit_validate::validate`); the first
/// failing check's kind is returned. Distinguishable by the caller so the
/// HTTP layer can map every variant to `400 Bad Request`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationErrorKind {
    #[error("must specify a pipeline name")]
    MissingPipelineName,
    #[error("must specify at least one step")]
    NoSteps,
    #[error("must specify a step name")]
    MissingStepName,
    #[error("must specify an image name")]
    MissingImageName,
    #[error("must specify a command or list of commands")]
    MissingCommands,
    #[error("all step names must be unique")]
    NonUniqueStepNames,
    #[error("all step dependencies must exist")]
    NonExistentStepDependency,
    #[error("must have no circular dependencies between steps")]
    CircularStepDependency,
}

/// Errors surfaced by the pipeline store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("pipeline not found: {0}")]
    NotFound(i64),
    #[error("store error: {0}")]
    Other(String),
}
