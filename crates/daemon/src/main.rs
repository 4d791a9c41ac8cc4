// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! conduitd — pipeline orchestration daemon.
//!
//! Thin entrypoint: load configuration, set up logging, serve. All wiring
//! lives in `conduit_daemon::build_router`/`serve`.

use conduit_daemon::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    conduit_daemon::init_logging();

    let config = Config::load()?;
    tracing::info!(
        job_runner_url = %config.job_runner_url,
        webhook_url = %config.webhook_url,
        "starting conduit daemon"
    );

    conduit_daemon::serve(config).await?;
    Ok(())
}
