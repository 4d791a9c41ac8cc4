// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Errors surfaced while loading configuration or binding the server.

use thiserror::Error;

/// Problems loading [`crate::config::Config`] from the environment.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be a valid port number: {1}")]
    InvalidPort(&'static str, String),
}
