// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Process configuration loaded from the environment — spec.md §6.
//!
//! Plain `std::env::var` reads with defaults, grounded on the teacher's
//! `daemon/src/env.rs` (centralized, fallible accessors rather than a
//! derive-macro config crate). The original Go daemon loads the same four
//! settings via `envconfig`; this is its idiomatic-Rust equivalent.

use crate::error::ConfigError;

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0";
const DEFAULT_BIND_PORT: u16 = 8080;
const DEFAULT_JOB_RUNNER_URL: &str = "http://localhost:8081";
const DEFAULT_WEBHOOK_URL: &str = "http://localhost:8080/webhook";

/// Everything the daemon needs to wire itself up, read once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the external job-runner service.
    pub job_runner_url: String,
    /// Address the HTTP server binds to.
    pub bind_address: String,
    /// Port the HTTP server binds to.
    pub bind_port: u16,
    /// Public URL the job runner should POST completion events to.
    pub webhook_url: String,
}

impl Config {
    /// Load configuration from `JOB_RUNNER_URL`, `BIND_ADDRESS`,
    /// `BIND_PORT`, and `WEBHOOK_URL`, falling back to sane local defaults
    /// for anything unset.
    pub fn load() -> Result<Self, ConfigError> {
        let bind_port = match std::env::var("BIND_PORT") {
            Ok(raw) => raw
                .parse()
                .map_err(|_| ConfigError::InvalidPort("BIND_PORT", raw))?,
            Err(_) => DEFAULT_BIND_PORT,
        };

        Ok(Self {
            job_runner_url: std::env::var("JOB_RUNNER_URL")
                .unwrap_or_else(|_| DEFAULT_JOB_RUNNER_URL.to_string()),
            bind_address: std::env::var("BIND_ADDRESS")
                .unwrap_or_else(|_| DEFAULT_BIND_ADDRESS.to_string()),
            bind_port,
            webhook_url: std::env::var("WEBHOOK_URL")
                .unwrap_or_else(|_| DEFAULT_WEBHOOK_URL.to_string()),
        })
    }

    /// Socket address the HTTP server binds to, as a `host:port` string.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.bind_address, self.bind_port)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
