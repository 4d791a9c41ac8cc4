// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Application state shared across every Axum handler.

use conduit_core::JobEvent;
use conduit_service::Service;
use tokio::sync::mpsc::UnboundedSender;

/// Shared state. `service` is the sole path handlers use to touch
/// pipelines; `webhook_tx` is the Demultiplexer's ingress sender, so the
/// webhook handler can push a decoded completion event directly onto it.
#[derive(Clone)]
pub struct AppState {
    pub service: Service,
    pub webhook_tx: UnboundedSender<JobEvent>,
}

impl AppState {
    pub fn new(service: Service, webhook_tx: UnboundedSender<JobEvent>) -> Self {
        Self { service, webhook_tx }
    }
}
