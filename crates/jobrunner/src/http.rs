// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Real HTTP-backed job-runner client.

use crate::{JobRunner, JobRunnerError};
use async_trait::async_trait;
use conduit_core::{JobHandle, JobId, JobSpec};

/// `reqwest`-backed implementation of [`JobRunner`].
///
/// Posts `CreateJob` to `{base_url}/jobs` and `StopJob` to
/// `{base_url}/jobs/{id}/stop`, per spec.md §6's job-runner client shape.
pub struct HttpJobRunner {
    client: reqwest::Client,
    base_url: String,
}

impl HttpJobRunner {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl JobRunner for HttpJobRunner {
    async fn create_job(&self, spec: JobSpec) -> Result<JobHandle, JobRunnerError> {
        let url = format!("{}/jobs", self.base_url);
        let response = self
            .client
            .post(&url)
            .json(&spec)
            .send()
            .await
            .map_err(|e| JobRunnerError::Request(e.to_string()))?;

        if !response.status().is_success() {
            return Err(JobRunnerError::UnexpectedResponse(format!(
                "create_job: {}",
                response.status()
            )));
        }

        response
            .json::<JobHandle>()
            .await
            .map_err(|e| JobRunnerError::UnexpectedResponse(e.to_string()))
    }

    async fn stop_job(&self, id: &JobId) -> Result<(), JobRunnerError> {
        let url = format!("{}/jobs/{}/stop", self.base_url, id.as_str());
        let response = self
            .client
            .post(&url)
            .send()
            .await
            .map_err(|e| JobRunnerError::Request(e.to_string()))?;

        if !response.status().is_success() {
            return Err(JobRunnerError::UnexpectedResponse(format!(
                "stop_job: {}",
                response.status()
            )));
        }
        Ok(())
    }

    fn base_url(&self) -> &str {
        &self.base_url
    }
}
