// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! conduit-daemon: process bootstrap for the pipeline orchestration service.
//!
//! Loads [`Config`] from the environment, wires the store, job-runner
//! client, demultiplexer, manager, and service façade together, and serves
//! the HTTP surface. No core scheduling logic lives here — this crate is
//! pure composition, grounded on the teacher's `daemon/src/main.rs` split
//! between a thin `main` and a `lib.rs` that owns the wiring.

pub mod config;
pub mod error;

pub use config::Config;
pub use error::ConfigError;

use axum::Router;
use conduit_api::AppState;
use conduit_engine::{Demultiplexer, Manager, Updater};
use conduit_jobrunner::{HttpJobRunner, JobRunner};
use conduit_service::Service;
use conduit_store::PipelineStore;
use std::sync::Arc;

/// Build the fully-wired Axum router for the given configuration, without
/// binding a socket. Split out from [`serve`] so tests can exercise the
/// HTTP surface in-process.
pub fn build_router(config: &Config) -> Router {
    let store = Arc::new(PipelineStore::new());
    let job_runner: Arc<dyn JobRunner> = Arc::new(HttpJobRunner::new(config.job_runner_url.clone()));
    let (demultiplexer, webhook_tx) = Demultiplexer::new(config.webhook_url.clone());
    demultiplexer.clone().start();

    let updater = Updater::new(Arc::clone(&store));
    let (manager, _manager_handle) = Manager::new(job_runner, Arc::clone(&demultiplexer), updater);
    let service = Service::new(store, manager);

    conduit_api::routes::router(AppState::new(service, webhook_tx))
}

/// Bind and serve the HTTP surface until the process is killed. No
/// persisted state layout: everything lives in this process's memory
/// (spec.md §6).
pub async fn serve(config: Config) -> std::io::Result<()> {
    let router = build_router(&config);
    let addr = config.bind_addr();
    tracing::info!(%addr, "binding conduit daemon");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, router).await
}

/// Install a `tracing-subscriber` that honors `RUST_LOG`, defaulting to
/// `info` — matching the teacher's `EnvFilter::try_from_default_env()`
/// fallback in `daemon/src/main.rs::setup_logging`.
pub fn init_logging() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .try_init();
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
