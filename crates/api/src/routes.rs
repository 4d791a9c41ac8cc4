// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Route table and handlers — spec.md §6.

use crate::error::ApiError;
use crate::state::AppState;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use conduit_core::{JobEvent, Pipeline};
use tower_http::trace::TraceLayer;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/pipelines", post(create_pipeline))
        .route("/pipelines/{id}", get(get_pipeline))
        .route("/webhook", post(receive_webhook))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn create_pipeline(
    State(state): State<AppState>,
    Json(pipeline): Json<Pipeline>,
) -> Result<(StatusCode, Json<Pipeline>), ApiError> {
    let stored = state.service.add(pipeline).await?;
    Ok((StatusCode::CREATED, Json(stored)))
}

async fn get_pipeline(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Pipeline>, ApiError> {
    let id: i64 = id
        .parse()
        .map_err(|_| ApiError::NotFound(format!("pipeline not found: {id}")))?;
    let pipeline = state.service.find(id)?;
    Ok(Json(pipeline))
}

async fn receive_webhook(
    State(state): State<AppState>,
    Json(event): Json<JobEvent>,
) -> StatusCode {
    // The ingress channel only closes if the Demultiplexer itself is gone,
    // which only happens if the whole process is shutting down.
    if state.webhook_tx.send(event).is_err() {
        tracing::warn!("webhook event dropped: demultiplexer ingress is closed");
    }
    StatusCode::ACCEPTED
}

#[cfg(test)]
#[path = "routes_tests.rs"]
mod tests;
